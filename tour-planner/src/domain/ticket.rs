//! Train ticket type.

use std::fmt;

use chrono::Duration;

use super::{Price, StationId, TimeOfDay, TrainId, format_span};

/// A daily recurring train service offer between two stations.
///
/// The ride duration is derived once at construction: arrival minus
/// departure, plus 24 hours when the arrival time of day precedes the
/// departure (an overnight service).
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use tour_planner::domain::{Price, StationId, Ticket, TimeOfDay, TrainId};
///
/// let ticket = Ticket::new(
///     TrainId::new(1),
///     StationId::new(1),
///     StationId::new(2),
///     Price::parse("10").unwrap(),
///     TimeOfDay::parse_hhmmss("23:00:00").unwrap(),
///     TimeOfDay::parse_hhmmss("01:30:00").unwrap(),
/// );
/// assert_eq!(ticket.duration(), Duration::minutes(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    train: TrainId,
    origin: StationId,
    destination: StationId,
    price: Price,
    departure: TimeOfDay,
    arrival: TimeOfDay,
    duration: Duration,
}

impl Ticket {
    /// Create a ticket, deriving its ride duration.
    pub fn new(
        train: TrainId,
        origin: StationId,
        destination: StationId,
        price: Price,
        departure: TimeOfDay,
        arrival: TimeOfDay,
    ) -> Self {
        Self {
            train,
            origin,
            destination,
            price,
            departure,
            arrival,
            duration: departure.until(arrival),
        }
    }

    /// Returns the train ID.
    pub fn train(&self) -> TrainId {
        self.train
    }

    /// Returns the origin station.
    pub fn origin(&self) -> StationId {
        self.origin
    }

    /// Returns the destination station.
    pub fn destination(&self) -> StationId {
        self.destination
    }

    /// Returns the price.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the daily departure time.
    pub fn departure(&self) -> TimeOfDay {
        self.departure
    }

    /// Returns the daily arrival time.
    pub fn arrival(&self) -> TimeOfDay {
        self.arrival
    }

    /// Returns the ride duration, always in `[0, 24h)`.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the waiting time before this ticket's next departure.
    ///
    /// `ready_at` is the traveller's clock at the origin station. `None`
    /// means the traveller is unconstrained (the very first leg of an
    /// itinerary) and never waits.
    pub fn waiting(&self, ready_at: Option<TimeOfDay>) -> Duration {
        ready_at.map_or_else(Duration::zero, |ready| ready.until(self.departure))
    }

    /// Returns waiting time plus ride duration for a traveller ready at `ready_at`.
    pub fn effective_duration(&self, ready_at: Option<TimeOfDay>) -> Duration {
        self.waiting(ready_at) + self.duration
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{TrainID: {}, from: {}, to: {}, price: {}, departure: {}, arrival: {}, duration: {}}}",
            self.train,
            self.origin,
            self.destination,
            self.price,
            self.departure,
            self.arrival,
            format_span(self.duration)
        )
    }
}
