use crate::park::{History, Queue, VisitorRecord};
use colored::Colorize;
use std::fmt;
use tracing::{debug, info};

/// Outcome of a single ride cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleReport {
    pub seats_filled: usize,
    pub admitted: Vec<String>,
    pub repeat_riders: Vec<String>,
    pub remaining_in_queue: usize,
}

/// 1. Cycle
///     * Takes visitors from the head of `queue` until `max_capacity` seats are
///       filled or the queue runs dry
///     * Offers every visitor to `history`
///         * Accepted visitors are reported in `admitted`
///         * Rejected visitors already rode, they still take a seat and are
///           reported in `repeat_riders`
///     * Empty queue is not an error, the report just has no seats filled
pub fn run_one_cycle<V: VisitorRecord>(
    queue: &mut Queue<V>,
    history: &mut History<V>,
    max_capacity: usize,
) -> CycleReport {
    let mut report = CycleReport::default();

    while report.seats_filled < max_capacity {
        let visitor = match queue.dequeue() {
            Ok(visitor) => visitor,
            Err(_) => break,
        };

        let ticket_id = visitor.ticket_id().to_string();

        report.seats_filled += 1;

        if history.add(visitor) {
            report.admitted.push(ticket_id);
        } else {
            debug!(ticket_id = %ticket_id, "repeat rider");

            report.repeat_riders.push(ticket_id);
        }
    }

    report.remaining_in_queue = queue.size();

    if report.seats_filled == 0 {
        info!("no visitors waiting, cycle ran empty");
    } else {
        info!(
            seats_filled = report.seats_filled,
            admitted = report.admitted.len(),
            repeat_riders = report.repeat_riders.len(),
            remaining_in_queue = report.remaining_in_queue,
            "cycle finished"
        );
    }

    report
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seats filled: {}", self.seats_filled.to_string().bold())?;
        writeln!(f, "Newly admitted: [{}]", self.admitted.join(", ").green())?;
        writeln!(f, "Repeat riders: [{}]", self.repeat_riders.join(", ").yellow())?;
        write!(f, "Still waiting: {}", self.remaining_in_queue)
    }
}
