//! Station and train identifiers.

use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} ID: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

/// Parse a non-negative decimal identifier.
fn parse_id(s: &str, kind: &'static str) -> Result<u32, InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "cannot be empty",
        });
    }

    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidId {
            kind,
            reason: "must be decimal digits",
        });
    }

    s.parse().map_err(|_| InvalidId {
        kind,
        reason: "out of range",
    })
}

/// A station identifier from the ticket catalog.
///
/// Stations are compared and ordered by their numeric ID, which makes
/// iteration over station collections deterministic.
///
/// # Examples
///
/// ```
/// use tour_planner::domain::StationId;
///
/// let id = StationId::parse("1909").unwrap();
/// assert_eq!(id.get(), 1909);
///
/// assert!(StationId::parse("-1").is_err());
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Create a station ID from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a station ID from a string of decimal digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_id(s, "station").map(Self)
    }

    /// Returns the numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A train (service) identifier from the ticket catalog.
///
/// Several tickets may share a station pair; the train ID is what tells
/// them apart in a report.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainId(u32);

impl TrainId {
    /// Create a train ID from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a train ID from a string of decimal digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_id(s, "train").map(Self)
    }

    /// Returns the numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
