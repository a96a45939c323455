use chrono::NaiveDate;

pub mod cycle;
pub mod history;
pub mod queue;
pub mod ride;
pub mod store;

pub use cycle::{run_one_cycle, CycleReport};
pub use history::History;
pub use queue::Queue;
pub use ride::{ImportSummary, Ride};

/// Read side of a visitor as the ride machinery sees it.
///
/// `ticket_id` is the identity in `History` and must not be empty.
pub trait VisitorRecord {
    fn ticket_id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn visit_date(&self) -> NaiveDate;
}
