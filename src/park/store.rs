//! Flat-file snapshots of a `History`.
//!
//! One entry per line, `ticketId|displayName|visitDate`, no header, dates as
//! `YYYY-MM-DD`. Fields are written as they are, so a name containing `|`
//! or a line break produces lines that will not import back. Ticket ids are
//! guarded by `Visitor::set_ticket_id`, ticket ids and names by
//! configuration validation.

use crate::error::RideError;
use crate::park::{History, VisitorRecord};
use crate::people::visitor::DATE_FORMAT;
use crate::people::{PersonDetails, Visitor};
use chrono::NaiveDate;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub const FIELD_DELIMITER: char = '|';

const FIELD_COUNT: usize = 3;

/// Line from a snapshot that could not be turned into a visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} skipped ({}): {}", self.line_number, self.reason, self.line)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub records: Vec<Visitor>,
    pub malformed: Vec<MalformedRecord>,
}

pub fn write_history<V: VisitorRecord, W: Write>(history: &History<V>, writer: &mut W) -> io::Result<()> {
    for visitor in history.iter() {
        writeln!(
            writer,
            "{}{d}{}{d}{}",
            visitor.ticket_id(),
            visitor.display_name(),
            visitor.visit_date().format(DATE_FORMAT),
            d = FIELD_DELIMITER
        )?;
    }

    Ok(())
}

/// Writes every entry in insertion order. The history is only read, so a
/// failed export leaves it exactly as it was.
pub fn export_history<V: VisitorRecord, P: AsRef<Path>>(history: &History<V>, destination: P) -> Result<(), RideError> {
    let path = destination.as_ref();
    let io_write = |cause: io::Error| RideError::IoWrite {
        path: path.display().to_string(),
        cause,
    };

    let file = File::create(path).map_err(io_write)?;
    let mut writer = BufWriter::new(file);

    write_history(history, &mut writer).map_err(io_write)?;
    writer.flush().map_err(io_write)?;

    info!(path = %path.display(), entries = history.count(), "history exported");

    Ok(())
}

pub fn read_history<R: BufRead>(reader: R) -> io::Result<ImportReport> {
    let mut report = ImportReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let parsed = match String::from_utf8(bytes) {
            Ok(line) => parse_line(&line).map_err(|reason| (line, reason)),
            Err(err) => Err((
                String::from_utf8_lossy(err.as_bytes()).into_owned(),
                "invalid UTF-8".to_string(),
            )),
        };

        match parsed {
            Ok(visitor) => report.records.push(visitor),
            Err((line, reason)) => {
                let malformed = MalformedRecord {
                    line_number: index + 1,
                    line,
                    reason,
                };

                warn!(line_number = malformed.line_number, reason = %malformed.reason, "malformed history record");

                report.malformed.push(malformed);
            }
        }
    }

    Ok(report)
}

/// Reads a snapshot back. Nothing is added to any history here, callers feed
/// `records` through `History::add` themselves.
pub fn import_history<P: AsRef<Path>>(source: P) -> Result<ImportReport, RideError> {
    let path = source.as_ref();
    let io_read = |cause: io::Error| RideError::IoRead {
        path: path.display().to_string(),
        cause,
    };

    let file = File::open(path).map_err(io_read)?;
    let report = read_history(BufReader::new(file)).map_err(io_read)?;

    info!(
        path = %path.display(),
        records = report.records.len(),
        malformed = report.malformed.len(),
        "history imported"
    );

    Ok(report)
}

fn parse_line(line: &str) -> Result<Visitor, String> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(format!("expected {} fields, found {}", FIELD_COUNT, fields.len()));
    }

    let (ticket_id, name, date) = (fields[0], fields[1], fields[2]);

    if ticket_id.is_empty() {
        return Err("empty ticket id".to_string());
    }

    let visit_date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|err| format!("invalid visit date \"{}\": {}", date, err))?;

    Ok(Visitor::new(
        PersonDetails::new(name, 0, "Unknown"),
        ticket_id,
        visit_date,
    ))
}
