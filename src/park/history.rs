use crate::park::VisitorRecord;
use std::collections::HashSet;
use std::slice;

/// Everybody who has finished a ride, at most once per ticket id.
///
/// Iteration follows insertion order; the sorted views return new vectors
/// and never reorder the canonical list.
#[derive(Debug, Clone)]
pub struct History<V: VisitorRecord> {
    entries: Vec<V>,
    tickets: HashSet<String>,
}

impl<V: VisitorRecord> History<V> {
    pub fn new() -> History<V> {
        History {
            entries: Vec::new(),
            tickets: HashSet::new(),
        }
    }

    /// Returns `false` and leaves the history untouched when the ticket is already present.
    pub fn add(&mut self, visitor: V) -> bool {
        if self.tickets.contains(visitor.ticket_id()) {
            return false;
        }

        self.tickets.insert(visitor.ticket_id().to_string());
        self.entries.push(visitor);

        true
    }

    /// Identity is the ticket id alone, other fields are not compared.
    pub fn contains(&self, visitor: &V) -> bool {
        self.contains_ticket(visitor.ticket_id())
    }

    pub fn contains_ticket(&self, ticket_id: &str) -> bool {
        self.tickets.contains(ticket_id)
    }

    pub fn find(&self, ticket_id: &str) -> Option<&V> {
        if !self.contains_ticket(ticket_id) {
            return None;
        }

        self.entries
            .iter()
            .find(|visitor| visitor.ticket_id() == ticket_id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.entries.iter()
    }

    pub fn sorted_by_name(&self) -> Vec<&V> {
        let mut sorted: Vec<&V> = self.entries.iter().collect();

        sorted.sort_by(|a, b| a.display_name().cmp(b.display_name()));

        sorted
    }

    pub fn sorted_by_date(&self) -> Vec<&V> {
        let mut sorted: Vec<&V> = self.entries.iter().collect();

        sorted.sort_by_key(|visitor| visitor.visit_date());

        sorted
    }
}

impl<V: VisitorRecord> Default for History<V> {
    fn default() -> History<V> {
        History::new()
    }
}

impl<'a, V: VisitorRecord> IntoIterator for &'a History<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        ticket: &'static str,
        name: &'static str,
        date: NaiveDate,
    }

    impl VisitorRecord for Record {
        fn ticket_id(&self) -> &str {
            self.ticket
        }

        fn display_name(&self) -> &str {
            self.name
        }

        fn visit_date(&self) -> NaiveDate {
            self.date
        }
    }

    fn record(ticket: &'static str, name: &'static str, day: u32) -> Record {
        Record {
            ticket,
            name,
            date: NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
        }
    }

    fn tickets<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'static str> {
        records.into_iter().map(|r| r.ticket).collect()
    }

    #[test]
    fn rejects_same_ticket_regardless_of_other_fields() {
        let mut history = History::new();

        assert!(history.add(record("T1", "Alice", 1)));
        assert!(!history.add(record("T1", "Someone Else", 9)));

        assert_eq!(history.count(), 1);
        assert_eq!(history.find("T1").unwrap().name, "Alice");
        assert!(history.contains(&record("T1", "Bob", 3)));
        assert!(!history.contains(&record("T2", "Alice", 1)));
    }

    #[test]
    fn iteration_is_restartable_and_in_insertion_order() {
        let mut history = History::new();

        history.add(record("T2", "Bob", 2));
        history.add(record("T1", "Alice", 1));

        assert_eq!(tickets(history.iter()), vec!["T2", "T1"]);
        assert_eq!(tickets(&history), vec!["T2", "T1"]);
    }

    #[test]
    fn sorted_views_are_stable_and_leave_order_alone() {
        let mut history = History::new();

        history.add(record("T1", "Carol", 3));
        history.add(record("T2", "Alice", 3));
        history.add(record("T3", "Carol", 1));
        history.add(record("T4", "Alice", 2));

        assert_eq!(tickets(history.sorted_by_name()), vec!["T2", "T4", "T1", "T3"]);
        assert_eq!(tickets(history.sorted_by_date()), vec!["T3", "T4", "T1", "T2"]);
        assert_eq!(tickets(history.iter()), vec!["T1", "T2", "T3", "T4"]);
    }

    #[test]
    fn find_missing_ticket() {
        let history: History<Record> = History::new();

        assert!(history.find("T9").is_none());
        assert!(history.is_empty());
    }
}
