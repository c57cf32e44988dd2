//! Itineraries: optimal tours annotated with alternative tickets.

use std::fmt;

use chrono::Duration;

use crate::domain::{Price, StationId, Ticket, TimeOfDay, format_span};
use crate::network::Graph;

use super::criterion::Criterion;
use super::search::Route;

/// Total of an itinerary under its objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Total {
    /// Sum of ticket prices.
    Price(Price),
    /// Sum of waits and rides.
    Duration(Duration),
}

impl From<Price> for Total {
    fn from(price: Price) -> Self {
        Total::Price(price)
    }
}

impl From<Duration> for Total {
    fn from(duration: Duration) -> Self {
        Total::Duration(duration)
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Price(price) => write!(f, "{price}"),
            Total::Duration(duration) => f.write_str(&format_span(*duration)),
        }
    }
}

/// One leg of an itinerary.
///
/// # Invariants
///
/// - `alternatives` contains `ticket`
/// - every alternative runs between the same two stations as `ticket`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryLeg<'g> {
    ticket: &'g Ticket,
    ready_at: Option<TimeOfDay>,
    alternatives: Vec<&'g Ticket>,
}

impl<'g> ItineraryLeg<'g> {
    /// Returns the ticket chosen by the search.
    pub fn ticket(&self) -> &'g Ticket {
        self.ticket
    }

    /// Returns the traveller's clock at the origin (`None` on the first leg).
    pub fn ready_at(&self) -> Option<TimeOfDay> {
        self.ready_at
    }

    /// Returns every ticket as good as the chosen one, chosen ticket included.
    pub fn alternatives(&self) -> &[&'g Ticket] {
        &self.alternatives
    }

    /// Returns the origin station.
    pub fn origin(&self) -> StationId {
        self.ticket.origin()
    }

    /// Returns the destination station.
    pub fn destination(&self) -> StationId {
        self.ticket.destination()
    }
}

/// An optimal tour, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary<'g> {
    stations: Vec<StationId>,
    legs: Vec<ItineraryLeg<'g>>,
    total: Total,
}

impl<'g> Itinerary<'g> {
    /// Returns the stations in visiting order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the legs in travelling order.
    pub fn legs(&self) -> &[ItineraryLeg<'g>] {
        &self.legs
    }

    /// Returns the itinerary total.
    pub fn total(&self) -> Total {
        self.total
    }
}

/// Expand a route into an itinerary, resolving alternatives leg by leg.
///
/// Alternatives are judged by the same criterion and at the same clock
/// the search used when it chose the leg.
pub fn resolve<'g, C: Criterion>(
    graph: &'g Graph,
    criterion: &C,
    route: Route<'g, C::Weight>,
) -> Itinerary<'g> {
    let legs = route
        .legs
        .iter()
        .map(|leg| {
            let alternatives = graph
                .station(leg.ticket.origin())
                .map(|origin| criterion.alternatives(origin, leg.ticket, leg.ready_at))
                .unwrap_or_else(|| vec![leg.ticket]);

            ItineraryLeg {
                ticket: leg.ticket,
                ready_at: leg.ready_at,
                alternatives,
            }
        })
        .collect();

    Itinerary {
        stations: route.stations,
        legs,
        total: route.total.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrainId;
    use crate::planner::criterion::{ByCost, ByDuration};
    use crate::planner::search::search;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    fn ticket(train: u32, from: u32, to: u32, price: &str, dep: &str, arr: &str) -> Ticket {
        Ticket::new(
            TrainId::new(train),
            StationId::new(from),
            StationId::new(to),
            Price::parse(price).unwrap(),
            t(dep),
            t(arr),
        )
    }

    #[test]
    fn total_display() {
        assert_eq!(Total::from(Price::from_minor_units(1500)).to_string(), "15.00");
        assert_eq!(Total::from(Duration::hours(23)).to_string(), "23h0m0s");
    }

    #[test]
    fn resolves_price_ties_per_leg() {
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "10", "08:00:00", "09:00:00"),
            ticket(2, 1, 2, "10", "13:00:00", "14:00:00"),
        ]);
        let mut routes = search(&graph, &ByCost).routes;
        assert_eq!(routes.len(), 1);

        let itinerary = resolve(&graph, &ByCost, routes.remove(0));
        assert_eq!(itinerary.stations(), &[StationId::new(1), StationId::new(2)]);
        assert_eq!(itinerary.total(), Total::Price(Price::from_minor_units(1000)));

        let leg = &itinerary.legs()[0];
        assert_eq!(leg.ticket().train(), TrainId::new(1));
        assert_eq!(leg.origin(), StationId::new(1));
        assert_eq!(leg.destination(), StationId::new(2));
        let trains: Vec<u32> = leg.alternatives().iter().map(|t| t.train().get()).collect();
        assert_eq!(trains, vec![1, 2]);
    }

    #[test]
    fn duration_alternatives_use_leg_clock() {
        // 1 -> 2 arrives 09:00. Onward 2 -> 3: trains 10 and 11 both take
        // 2h from 09:00 (wait 1h + ride 1h, wait 0h + ride 2h).
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "1", "08:00:00", "09:00:00"),
            ticket(10, 2, 3, "1", "10:00:00", "11:00:00"),
            ticket(11, 2, 3, "1", "09:00:00", "11:00:00"),
        ]);
        let mut routes = search(&graph, &ByDuration).routes;
        assert_eq!(routes.len(), 1);

        let itinerary = resolve(&graph, &ByDuration, routes.remove(0));
        assert_eq!(itinerary.total(), Total::Duration(Duration::hours(3)));

        let first = &itinerary.legs()[0];
        assert_eq!(first.ready_at(), None);

        let second = &itinerary.legs()[1];
        assert_eq!(second.ready_at(), Some(t("09:00:00")));
        let trains: Vec<u32> = second.alternatives().iter().map(|t| t.train().get()).collect();
        assert_eq!(trains, vec![10, 11]);
    }
}
