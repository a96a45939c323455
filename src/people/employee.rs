use crate::people::PersonDetails;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    details: PersonDetails,
    employee_id: String,
    ride_specialization: String,
}

impl Employee {
    pub fn new<I: Into<String>, S: Into<String>>(
        details: PersonDetails,
        employee_id: I,
        ride_specialization: S,
    ) -> Employee {
        Employee {
            details,
            employee_id: employee_id.into(),
            ride_specialization: ride_specialization.into(),
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

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn set_employee_id<I: Into<String>>(&mut self, employee_id: I) {
        self.employee_id = employee_id.into();
    }

    pub fn ride_specialization(&self) -> &str {
        &self.ride_specialization
    }

    pub fn set_ride_specialization<S: Into<String>>(&mut self, ride_specialization: S) {
        self.ride_specialization = ride_specialization.into();
    }
}

impl Default for Employee {
    fn default() -> Employee {
        Employee::new(PersonDetails::default(), "Unknown", "Unknown")
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Employee [ID: {}, Specialization: {}]",
            self.details, self.employee_id, self.ride_specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_operator() {
        let operator = Employee::new(
            PersonDetails::new("John Doe", 35, "123-456-7890"),
            "EMP001",
            "Roller Coaster",
        );

        assert_eq!(
            operator.to_string(),
            "Person [Name: John Doe, Age: 35, Contact: 123-456-7890] | Employee [ID: EMP001, Specialization: Roller Coaster]"
        );
    }
}
