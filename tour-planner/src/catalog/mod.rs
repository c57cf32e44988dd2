//! Ticket catalog ingestion.
//!
//! A catalog is a semicolon-delimited text file with one ticket per line
//! and no header:
//!
//! ```text
//! {1909;1902;1905;112.49;23:50:00;03:55:00}
//! ```
//!
//! Fields are train ID, origin station, destination station, price,
//! departure time and arrival time. Surrounding spaces and braces are
//! ignored. A single malformed line rejects the whole catalog.

mod error;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::domain::{Price, StationId, Ticket, TimeOfDay, TrainId};

pub use error::CatalogError;

/// Number of fields in a catalog line.
const FIELD_COUNT: usize = 6;

/// Read a ticket catalog from a file.
pub fn read_catalog(path: &Path) -> Result<Vec<Ticket>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let tickets = parse_catalog(file)?;
    debug!(path = %path.display(), tickets = tickets.len(), "read ticket catalog");
    Ok(tickets)
}

/// Parse a ticket catalog from any reader.
///
/// # Examples
///
/// ```
/// use tour_planner::catalog::parse_catalog;
///
/// let data = "{1;10;20;15.50;08:00:00;09:30:00}\n{2;20;10;9;22:00:00;01:00:00}\n";
/// let tickets = parse_catalog(data.as_bytes()).unwrap();
/// assert_eq!(tickets.len(), 2);
/// assert_eq!(tickets[1].duration(), chrono::Duration::hours(3));
///
/// assert!(parse_catalog("{1;10;20;oops;08:00:00;09:30:00}".as_bytes()).is_err());
/// ```
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Ticket>, CatalogError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut tickets = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if is_blank(&record) {
            continue;
        }

        tickets.push(parse_ticket(&record, line)?);
    }

    Ok(tickets)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| clean(field).is_empty())
}

/// Strip the spaces and braces that wrap catalog fields.
fn clean(field: &str) -> &str {
    field
        .trim()
        .trim_matches(|c| c == '{' || c == '}')
        .trim()
}

fn parse_ticket(record: &StringRecord, line: u64) -> Result<Ticket, CatalogError> {
    if record.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCount {
            line,
            found: record.len(),
        });
    }

    let field = |idx: usize| clean(&record[idx]);
    let invalid = |field: &'static str, err: &dyn fmt::Display| CatalogError::Field {
        line,
        field,
        message: err.to_string(),
    };

    let train = TrainId::parse(field(0)).map_err(|e| invalid("train ID", &e))?;
    let origin = StationId::parse(field(1)).map_err(|e| invalid("origin station", &e))?;
    let destination =
        StationId::parse(field(2)).map_err(|e| invalid("destination station", &e))?;
    let price = Price::parse(field(3)).map_err(|e| invalid("price", &e))?;
    let departure =
        TimeOfDay::parse_hhmmss(field(4)).map_err(|e| invalid("departure time", &e))?;
    let arrival = TimeOfDay::parse_hhmmss(field(5)).map_err(|e| invalid("arrival time", &e))?;

    Ok(Ticket::new(
        train,
        origin,
        destination,
        price,
        departure,
        arrival,
    ))
}
