use crate::error::ValidationError;
use crate::park::store::FIELD_DELIMITER;
use crate::park::Ride;
use crate::people::visitor::validate_ticket_id;
use crate::people::{Employee, PersonDetails, Visitor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmployeeConfig {
    pub name: String,
    pub age: i32,
    pub contact_number: String,
    pub employee_id: String,
    pub ride_specialization: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RideConfig {
    pub name: String,
    pub max_capacity: usize, // Maximum number of visitors admitted by one cycle
    pub operator: Option<EmployeeConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VisitorConfig {
    pub name: String,
    pub age: i32,
    pub contact_number: String,
    pub ticket_id: String,
    pub visit_date: NaiveDate, // YYYY-MM-DD
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemConfig {
    pub ride: RideConfig,
    pub visitors: Vec<VisitorConfig>, // Arrival order, repeated tickets mean re-riding
    pub history_file: String,
}

impl From<EmployeeConfig> for Employee {
    fn from(config: EmployeeConfig) -> Employee {
        Employee::new(
            PersonDetails::new(config.name, config.age, config.contact_number),
            config.employee_id,
            config.ride_specialization,
        )
    }
}

impl From<VisitorConfig> for Visitor {
    fn from(config: VisitorConfig) -> Visitor {
        Visitor::new(
            PersonDetails::new(config.name, config.age, config.contact_number),
            config.ticket_id,
            config.visit_date,
        )
    }
}

impl From<RideConfig> for Ride {
    fn from(config: RideConfig) -> Ride {
        Ride::new(config.name, config.max_capacity, config.operator.map(Employee::from))
    }
}

pub fn validate_config(config: &SystemConfig) -> Result<(), ValidationError> {
    if config.ride.max_capacity < 1 {
        return Err(ValidationError::new(format!(
            "ride \"{}\" has capacity below 1",
            config.ride.name
        )));
    }

    if let Some(operator) = &config.ride.operator {
        if operator.age < 0 {
            return Err(ValidationError::new(format!(
                "operator \"{}\" has negative age",
                operator.employee_id
            )));
        }
    }

    for visitor in config.visitors.iter() {
        validate_ticket_id(&visitor.ticket_id).map_err(|err| {
            ValidationError::new(format!("visitor \"{}\": {}", visitor.name, err.error))
        })?;

        if visitor.name.contains(|c: char| c == FIELD_DELIMITER || c == '\n' || c == '\r') {
            return Err(ValidationError::new(format!(
                "visitor with ticket \"{}\" has a name that cannot be stored in history",
                visitor.ticket_id
            )));
        }

        if visitor.age < 0 {
            return Err(ValidationError::new(format!(
                "visitor with ticket \"{}\" has negative age",
                visitor.ticket_id
            )));
        }
    }

    Ok(())
}

pub fn get_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig, failure::Error> {
    let file = File::open(path)?;

    let config = serde_json::from_reader(file)?;

    Ok(config)
}

fn visitor(name: &str, age: i32, contact_number: &str, ticket_id: &str, (y, m, d): (i32, u32, u32)) -> VisitorConfig {
    VisitorConfig {
        name: name.to_string(),
        age,
        contact_number: contact_number.to_string(),
        ticket_id: ticket_id.to_string(),
        visit_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

impl Default for SystemConfig {
    fn default() -> SystemConfig {
        SystemConfig {
            ride: RideConfig {
                name: "Thunderbolt".to_string(),
                max_capacity: 4,
                operator: Some(EmployeeConfig {
                    name: "John Doe".to_string(),
                    age: 35,
                    contact_number: "123-456-7890".to_string(),
                    employee_id: "EMP001".to_string(),
                    ride_specialization: "Roller Coaster".to_string(),
                }),
            },
            visitors: vec![
                visitor("Jane Smith", 28, "987-654-3210", "TICKET001", (2025, 11, 28)),
                visitor("Tom Lee", 31, "555-0101", "TICKET002", (2025, 12, 1)),
                visitor("Ava Brown", 19, "555-0102", "TICKET003", (2025, 11, 30)),
                visitor("Liam Chen", 42, "555-0103", "TICKET004", (2025, 12, 1)),
                visitor("Mia Wong", 25, "555-0104", "TICKET005", (2025, 11, 29)),
                visitor("Jane Smith", 28, "987-654-3210", "TICKET001", (2025, 11, 28)),
                visitor("Noah Davis", 37, "555-0105", "TICKET006", (2025, 12, 2)),
            ],
            history_file: "ride_history.txt".to_string(),
        }
    }
}
