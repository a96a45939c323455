use crate::error::{RideError, ValidationError};
use crate::park::{cycle, store, CycleReport, History, Queue, VisitorRecord};
use crate::people::{Employee, Visitor};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_MAX_CAPACITY: usize = 2;

/// Counts from feeding an imported snapshot into a ride's history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub already_present: usize,
    pub malformed: usize,
}

#[derive(Debug)]
pub struct Ride {
    name: String,
    max_capacity: usize,
    operator: Option<Employee>,
    queue: Queue<Visitor>,
    history: History<Visitor>,
}

impl Ride {
    /// A capacity below 1 falls back to `DEFAULT_MAX_CAPACITY`.
    pub fn new<N: Into<String>>(name: N, max_capacity: usize, operator: Option<Employee>) -> Ride {
        let name = name.into();

        let max_capacity = if max_capacity >= 1 {
            max_capacity
        } else {
            warn!(ride = %name, max_capacity, "invalid capacity, using default");

            DEFAULT_MAX_CAPACITY
        };

        Ride {
            name,
            max_capacity,
            operator,
            queue: Queue::new(),
            history: History::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn set_max_capacity(&mut self, max_capacity: usize) -> Result<(), ValidationError> {
        if max_capacity < 1 {
            warn!(ride = %self.name, max_capacity, "rejected capacity below 1");

            return Err(ValidationError::new("max capacity must be at least 1"));
        }

        self.max_capacity = max_capacity;

        Ok(())
    }

    pub fn operator(&self) -> Option<&Employee> {
        self.operator.as_ref()
    }

    pub fn set_operator(&mut self, operator: Option<Employee>) {
        self.operator = operator;
    }

    pub fn queue(&self) -> &Queue<Visitor> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Queue<Visitor> {
        &mut self.queue
    }

    pub fn history(&self) -> &History<Visitor> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History<Visitor> {
        &mut self.history
    }

    pub fn add_visitor_to_queue(&mut self, visitor: Visitor) {
        info!(ride = %self.name, ticket_id = %visitor.ticket_id(), "visitor joined the queue");

        self.queue.enqueue(visitor);
    }

    pub fn remove_visitor_from_queue(&mut self) -> Result<Visitor, RideError> {
        let visitor = self.queue.dequeue()?;

        info!(ride = %self.name, ticket_id = %visitor.ticket_id(), "visitor left the queue");

        Ok(visitor)
    }

    pub fn add_visitor_to_history(&mut self, visitor: Visitor) -> bool {
        self.history.add(visitor)
    }

    pub fn check_visitor_from_history(&self, visitor: &Visitor) -> bool {
        self.history.contains(visitor)
    }

    pub fn number_of_visitors(&self) -> usize {
        self.history.count()
    }

    /// Capacity is read at call time, so changes between cycles apply to the next one.
    pub fn run_one_cycle(&mut self) -> CycleReport {
        if self.operator.is_none() {
            warn!(ride = %self.name, "running a cycle without an assigned operator");
        }

        cycle::run_one_cycle(&mut self.queue, &mut self.history, self.max_capacity)
    }

    pub fn export_history<P: AsRef<Path>>(&self, destination: P) -> Result<(), RideError> {
        store::export_history(&self.history, destination)
    }

    /// Additive: existing entries stay, imported ones go through `History::add`.
    pub fn import_history<P: AsRef<Path>>(&mut self, source: P) -> Result<ImportSummary, RideError> {
        let report = store::import_history(source)?;

        let mut summary = ImportSummary {
            malformed: report.malformed.len(),
            ..ImportSummary::default()
        };

        for visitor in report.records {
            if self.history.add(visitor) {
                summary.added += 1;
            } else {
                summary.already_present += 1;
            }
        }

        Ok(summary)
    }
}

impl Default for Ride {
    fn default() -> Ride {
        Ride::new("Unknown", DEFAULT_MAX_CAPACITY, None)
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ride [Name: {}, Max Capacity: {}, Operator: ", self.name, self.max_capacity)?;

        match &self.operator {
            Some(operator) => write!(f, "{} (ID: {})]", operator.name(), operator.employee_id()),
            None => write!(f, "No operator assigned]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::PersonDetails;
    use chrono::NaiveDate;

    fn visitor(ticket: &str) -> Visitor {
        Visitor::new(
            PersonDetails::new(format!("Visitor {}", ticket), 20, "555-0100"),
            ticket,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        )
    }

    #[test]
    fn invalid_capacity_falls_back_to_default() {
        assert_eq!(Ride::new("Thunderbolt", 0, None).max_capacity(), DEFAULT_MAX_CAPACITY);
    }

    #[test]
    fn capacity_setter_rejects_zero() {
        let mut ride = Ride::new("Thunderbolt", 4, None);

        assert!(ride.set_max_capacity(0).is_err());
        assert_eq!(ride.max_capacity(), 4);

        ride.set_max_capacity(1).unwrap();
        assert_eq!(ride.max_capacity(), 1);
    }

    #[test]
    fn capacity_change_applies_to_next_cycle() {
        let mut ride = Ride::new("Thunderbolt", 1, None);

        (1..=5).for_each(|n| ride.add_visitor_to_queue(visitor(&format!("T{}", n))));

        assert_eq!(ride.run_one_cycle().seats_filled, 1);

        ride.set_max_capacity(3).unwrap();

        let report = ride.run_one_cycle();
        assert_eq!(report.seats_filled, 3);
        assert_eq!(report.remaining_in_queue, 1);
        assert_eq!(ride.number_of_visitors(), 4);
    }

    #[test]
    fn removing_from_empty_queue_is_reported() {
        let mut ride = Ride::default();

        assert!(ride.remove_visitor_from_queue().is_err());
        assert_eq!(ride.queue().size(), 0);
    }

    #[test]
    fn renders_with_and_without_operator() {
        let mut ride = Ride::new("Thunderbolt", 4, None);

        assert_eq!(
            ride.to_string(),
            "Ride [Name: Thunderbolt, Max Capacity: 4, Operator: No operator assigned]"
        );

        ride.set_operator(Some(Employee::new(
            PersonDetails::new("John Doe", 35, "123-456-7890"),
            "EMP001",
            "Roller Coaster",
        )));

        assert_eq!(
            ride.to_string(),
            "Ride [Name: Thunderbolt, Max Capacity: 4, Operator: John Doe (ID: EMP001)]"
        );
    }
}
