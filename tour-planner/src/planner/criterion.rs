//! Edge weighting for the two search objectives.
//!
//! A [`Criterion`] decides how much a ticket costs the traveller, which
//! ticket is best on a station pair, and which other tickets on that pair
//! are just as good. The search engine is generic over it.

use std::fmt;
use std::ops::Add;

use chrono::Duration;

use crate::domain::{Price, StationId, Ticket, TimeOfDay};
use crate::network::Station;

use super::itinerary::Total;

/// Trait for weighing tickets under a search objective.
pub trait Criterion {
    /// Accumulated weight of a partial or complete itinerary.
    type Weight: Copy + Ord + Add<Output = Self::Weight> + Into<Total> + fmt::Debug;

    /// Weight of an itinerary with no legs.
    fn zero(&self) -> Self::Weight;

    /// Weight of taking `ticket` for a traveller ready at `ready_at`.
    ///
    /// `ready_at` is `None` on the first leg of an itinerary.
    fn weigh(&self, ticket: &Ticket, ready_at: Option<TimeOfDay>) -> Self::Weight;

    /// The best ticket from `from` to `to`, with its weight.
    ///
    /// Returns `None` if there is no direct ticket. On equal weights the
    /// ticket earliest in catalog order wins; the others are surfaced by
    /// [`alternatives`](Self::alternatives).
    fn best_ticket<'g>(
        &self,
        from: &'g Station,
        to: StationId,
        ready_at: Option<TimeOfDay>,
    ) -> Option<(&'g Ticket, Self::Weight)> {
        let mut best: Option<(&'g Ticket, Self::Weight)> = None;

        for ticket in from.tickets_to(to) {
            let weight = self.weigh(ticket, ready_at);
            match best {
                Some((_, best_weight)) if weight >= best_weight => {}
                _ => best = Some((ticket, weight)),
            }
        }

        best
    }

    /// Every ticket from `from` to the chosen ticket's destination that
    /// weighs exactly the same as `chosen` at `ready_at`.
    ///
    /// The chosen ticket is part of the result.
    fn alternatives<'g>(
        &self,
        from: &'g Station,
        chosen: &Ticket,
        ready_at: Option<TimeOfDay>,
    ) -> Vec<&'g Ticket> {
        let target = self.weigh(chosen, ready_at);

        from.tickets_to(chosen.destination())
            .iter()
            .filter(|ticket| self.weigh(ticket, ready_at) == target)
            .collect()
    }
}

/// Weighs tickets by price. The traveller's clock is irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCost;

impl Criterion for ByCost {
    type Weight = Price;

    fn zero(&self) -> Price {
        Price::ZERO
    }

    fn weigh(&self, ticket: &Ticket, _ready_at: Option<TimeOfDay>) -> Price {
        ticket.price()
    }
}

/// Weighs tickets by waiting time plus ride duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDuration;

impl Criterion for ByDuration {
    type Weight = Duration;

    fn zero(&self) -> Duration {
        Duration::zero()
    }

    fn weigh(&self, ticket: &Ticket, ready_at: Option<TimeOfDay>) -> Duration {
        ticket.effective_duration(ready_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrainId;
    use crate::network::Graph;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    fn sid(n: u32) -> StationId {
        StationId::new(n)
    }

    fn ticket(train: u32, from: u32, to: u32, price: &str, dep: &str, arr: &str) -> Ticket {
        Ticket::new(
            TrainId::new(train),
            sid(from),
            sid(to),
            Price::parse(price).unwrap(),
            t(dep),
            t(arr),
        )
    }

    fn trains(tickets: &[&Ticket]) -> Vec<u32> {
        tickets.iter().map(|t| t.train().get()).collect()
    }

    #[test]
    fn cheapest_ticket_wins() {
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "12", "08:00:00", "09:00:00"),
            ticket(2, 1, 2, "9.99", "10:00:00", "13:00:00"),
            ticket(3, 1, 2, "15", "11:00:00", "11:30:00"),
        ]);
        let station = graph.station(sid(1)).unwrap();

        let (best, price) = ByCost.best_ticket(station, sid(2), None).unwrap();
        assert_eq!(best.train().get(), 2);
        assert_eq!(price, Price::parse("9.99").unwrap());
    }

    #[test]
    fn price_tie_keeps_first_in_catalog_order() {
        let graph = Graph::from_tickets(vec![
            ticket(5, 1, 2, "10", "08:00:00", "09:00:00"),
            ticket(4, 1, 2, "10", "10:00:00", "11:00:00"),
        ]);
        let station = graph.station(sid(1)).unwrap();

        let (best, _) = ByCost.best_ticket(station, sid(2), None).unwrap();
        assert_eq!(best.train().get(), 5);
    }

    #[test]
    fn no_ticket_is_none() {
        let graph = Graph::from_tickets(vec![ticket(1, 1, 2, "1", "08:00:00", "09:00:00")]);
        let station = graph.station(sid(1)).unwrap();

        assert!(ByCost.best_ticket(station, sid(3), None).is_none());
        assert!(ByDuration.best_ticket(station, sid(3), Some(t("10:00:00"))).is_none());
    }

    #[test]
    fn fastest_depends_on_ready_time() {
        // A: 08:00 -> 09:00 (1h ride), B: 11:00 -> 14:00 (3h ride)
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "1", "08:00:00", "09:00:00"),
            ticket(2, 1, 2, "1", "11:00:00", "14:00:00"),
        ]);
        let station = graph.station(sid(1)).unwrap();

        // Unconstrained: shortest ride
        let (best, weight) = ByDuration.best_ticket(station, sid(2), None).unwrap();
        assert_eq!(best.train().get(), 1);
        assert_eq!(weight, Duration::hours(1));

        // Ready at 10:00: A means waiting 22h, B only 1h
        let (best, weight) = ByDuration
            .best_ticket(station, sid(2), Some(t("10:00:00")))
            .unwrap();
        assert_eq!(best.train().get(), 2);
        assert_eq!(weight, Duration::hours(4));
    }

    #[test]
    fn missed_departure_costs_next_day() {
        let graph = Graph::from_tickets(vec![ticket(1, 1, 2, "1", "08:00:00", "09:00:00")]);
        let station = graph.station(sid(1)).unwrap();

        let (_, weight) = ByDuration
            .best_ticket(station, sid(2), Some(t("10:00:00")))
            .unwrap();
        assert_eq!(weight, Duration::hours(23));
    }

    #[test]
    fn equal_price_alternatives() {
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "10", "08:00:00", "09:00:00"),
            ticket(2, 1, 2, "10", "12:00:00", "15:00:00"),
            ticket(3, 1, 2, "11", "09:00:00", "10:00:00"),
            ticket(4, 1, 3, "10", "09:00:00", "10:00:00"),
        ]);
        let station = graph.station(sid(1)).unwrap();
        let (chosen, _) = ByCost.best_ticket(station, sid(2), None).unwrap();

        let alternatives = ByCost.alternatives(station, chosen, None);
        assert_eq!(trains(&alternatives), vec![1, 2]);
    }

    #[test]
    fn equal_duration_alternatives_at_same_clock() {
        // Ready at 07:00: train 1 waits 1h rides 2h, train 2 waits 2h rides 1h,
        // train 3 waits 0h rides 4h.
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "1", "08:00:00", "10:00:00"),
            ticket(2, 1, 2, "9", "09:00:00", "10:00:00"),
            ticket(3, 1, 2, "1", "07:00:00", "11:00:00"),
        ]);
        let station = graph.station(sid(1)).unwrap();
        let ready = Some(t("07:00:00"));

        let (chosen, weight) = ByDuration.best_ticket(station, sid(2), ready).unwrap();
        assert_eq!(weight, Duration::hours(3));

        let alternatives = ByDuration.alternatives(station, chosen, ready);
        assert_eq!(trains(&alternatives), vec![1, 2]);

        // Unconstrained, the rides alone differ
        let alternatives = ByDuration.alternatives(station, chosen, None);
        assert_eq!(trains(&alternatives), vec![1]);
    }

    #[test]
    fn alternatives_include_chosen_when_unique() {
        let graph = Graph::from_tickets(vec![ticket(1, 1, 2, "3", "08:00:00", "09:00:00")]);
        let station = graph.station(sid(1)).unwrap();
        let chosen = &station.tickets_to(sid(2))[0];

        assert_eq!(trains(&ByCost.alternatives(station, chosen, None)), vec![1]);
    }
}
