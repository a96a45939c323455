use crate::error::ValidationError;
use std::fmt;
use tracing::warn;

pub mod employee;
pub mod visitor;

pub use employee::Employee;
pub use visitor::Visitor;

/// Fields shared by everybody in the park, embedded into `Visitor` and `Employee`.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetails {
    name: String,
    age: i32,
    contact_number: String,
}

impl PersonDetails {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, age: i32, contact_number: C) -> PersonDetails {
        PersonDetails {
            name: name.into(),
            age,
            contact_number: contact_number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) -> Result<(), ValidationError> {
        if age < 0 {
            warn!(name = %self.name, age, "rejected negative age");

            return Err(ValidationError::new("age cannot be negative"));
        }

        self.age = age;

        Ok(())
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn set_contact_number<C: Into<String>>(&mut self, contact_number: C) {
        self.contact_number = contact_number.into();
    }
}

impl Default for PersonDetails {
    fn default() -> PersonDetails {
        PersonDetails::new("Unknown", 0, "Unknown")
    }
}

impl fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [Name: {}, Age: {}, Contact: {}]",
            self.name, self.age, self.contact_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_age_is_rejected_and_keeps_old_value() {
        let mut person = PersonDetails::new("Jane Smith", 28, "987-654-3210");

        assert!(person.set_age(-1).is_err());
        assert_eq!(person.age(), 28);

        assert!(person.set_age(30).is_ok());
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn renders_person_line() {
        let person = PersonDetails::new("John Doe", 35, "123-456-7890");

        assert_eq!(
            person.to_string(),
            "Person [Name: John Doe, Age: 35, Contact: 123-456-7890]"
        );
        assert_eq!(
            PersonDetails::default().to_string(),
            "Person [Name: Unknown, Age: 0, Contact: Unknown]"
        );
    }
}
