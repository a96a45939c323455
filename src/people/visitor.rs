use crate::error::ValidationError;
use crate::park::store::FIELD_DELIMITER;
use crate::park::VisitorRecord;
use crate::people::PersonDetails;
use chrono::NaiveDate;
use std::fmt;
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Visitor {
    details: PersonDetails,
    ticket_id: String,
    visit_date: NaiveDate,
}

impl Visitor {
    /// Trusts `ticket_id`; use `set_ticket_id` when the id comes from outside.
    pub fn new<T: Into<String>>(details: PersonDetails, ticket_id: T, visit_date: NaiveDate) -> Visitor {
        Visitor {
            details,
            ticket_id: ticket_id.into(),
            visit_date,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut PersonDetails {
        &mut self.details
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn set_ticket_id<T: Into<String>>(&mut self, ticket_id: T) -> Result<(), ValidationError> {
        let ticket_id = ticket_id.into();

        validate_ticket_id(&ticket_id).map_err(|err| {
            warn!(ticket_id = %ticket_id, "rejected ticket id");

            err
        })?;

        self.ticket_id = ticket_id;

        Ok(())
    }

    pub fn set_visit_date(&mut self, visit_date: NaiveDate) {
        self.visit_date = visit_date;
    }
}

pub fn validate_ticket_id(ticket_id: &str) -> Result<(), ValidationError> {
    if ticket_id.is_empty() {
        return Err(ValidationError::new("ticket id cannot be empty"));
    }

    if ticket_id.contains(FIELD_DELIMITER) {
        return Err(ValidationError::new(format!(
            "ticket id \"{}\" contains the \"{}\" delimiter",
            ticket_id, FIELD_DELIMITER
        )));
    }

    Ok(())
}

impl VisitorRecord for Visitor {
    fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    fn display_name(&self) -> &str {
        self.details.name()
    }

    fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }
}

impl Default for Visitor {
    fn default() -> Visitor {
        Visitor::new(
            PersonDetails::default(),
            "Unknown",
            NaiveDate::default(),
        )
    }
}

impl fmt::Display for Visitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Visitor [Ticket ID: {}, Visit Date: {}]",
            self.details,
            self.ticket_id,
            self.visit_date.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Visitor {
        Visitor::new(
            PersonDetails::new("Jane Smith", 28, "987-654-3210"),
            "TICKET001",
            NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
        )
    }

    #[test]
    fn renders_visitor() {
        assert_eq!(
            jane().to_string(),
            "Person [Name: Jane Smith, Age: 28, Contact: 987-654-3210] | Visitor [Ticket ID: TICKET001, Visit Date: 2025-11-28]"
        );
    }

    #[test]
    fn person_fields_go_through_details() {
        let mut visitor = jane();

        visitor.details_mut().set_name("Jane Doe");
        assert!(visitor.details_mut().set_age(-5).is_err());

        assert_eq!(visitor.display_name(), "Jane Doe");
        assert_eq!(visitor.details().age(), 28);
    }

    #[test]
    fn ticket_setter_rejects_empty_and_delimited_ids() {
        let mut visitor = jane();

        assert!(visitor.set_ticket_id("").is_err());
        assert!(visitor.set_ticket_id("T|1").is_err());
        assert_eq!(visitor.ticket_id(), "TICKET001");

        visitor.set_ticket_id("TICKET002").unwrap();
        assert_eq!(visitor.ticket_id(), "TICKET002");
    }
}
