//! Station graph built from a ticket catalog.
//!
//! The graph is a directed multigraph: every ticket is an edge from its
//! origin to its destination, and a station pair may carry any number of
//! parallel tickets (different trains, times and prices).

use std::collections::BTreeMap;

use crate::domain::{StationId, Ticket};

use super::UnvisitedSet;

/// A station and the tickets departing from it.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    /// Outgoing tickets grouped by destination, each group in catalog order.
    outgoing: BTreeMap<StationId, Vec<Ticket>>,
}

impl Station {
    fn new(id: StationId) -> Self {
        Self {
            id,
            outgoing: BTreeMap::new(),
        }
    }

    /// Returns the station ID.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns every ticket from this station to `destination`, in catalog order.
    ///
    /// Empty if there is no direct service.
    pub fn tickets_to(&self, destination: StationId) -> &[Ticket] {
        self.outgoing
            .get(&destination)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns all outgoing tickets, grouped by ascending destination.
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.outgoing.values().flatten()
    }

    /// Returns the stations directly reachable from here.
    pub fn destinations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.outgoing.keys().copied()
    }
}

/// The station graph.
///
/// Built once, then read-only for the whole search. Every origin and
/// destination of an added ticket has a station; stations may also be
/// registered without any tickets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: BTreeMap<StationId, Station>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a ticket catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_planner::domain::{Price, StationId, Ticket, TimeOfDay, TrainId};
    /// use tour_planner::network::Graph;
    ///
    /// let t = |s| TimeOfDay::parse_hhmmss(s).unwrap();
    /// let ticket = Ticket::new(
    ///     TrainId::new(7),
    ///     StationId::new(1),
    ///     StationId::new(2),
    ///     Price::parse("12.50").unwrap(),
    ///     t("08:00:00"),
    ///     t("09:00:00"),
    /// );
    ///
    /// let graph = Graph::from_tickets(vec![ticket]);
    /// assert_eq!(graph.len(), 2);
    /// assert_eq!(graph.ticket_count(), 1);
    /// ```
    pub fn from_tickets<I>(tickets: I) -> Self
    where
        I: IntoIterator<Item = Ticket>,
    {
        let mut graph = Self::new();
        for ticket in tickets {
            graph.add_ticket(ticket);
        }
        graph
    }

    /// Register a station. Returns false if it already existed.
    pub fn add_station(&mut self, id: StationId) -> bool {
        if self.stations.contains_key(&id) {
            return false;
        }
        self.stations.insert(id, Station::new(id));
        true
    }

    /// Add a ticket as an edge, registering both endpoints.
    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.add_station(ticket.destination());
        self.stations
            .entry(ticket.origin())
            .or_insert_with(|| Station::new(ticket.origin()))
            .outgoing
            .entry(ticket.destination())
            .or_default()
            .push(ticket);
    }

    /// Look up a station.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Returns all stations in ascending ID order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Returns the set of every station in the graph.
    pub fn station_set(&self) -> UnvisitedSet {
        self.stations.keys().copied().collect()
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the total number of tickets.
    pub fn ticket_count(&self) -> usize {
        self.stations.values().map(|s| s.tickets().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, TimeOfDay, TrainId};

    fn ticket(train: u32, from: u32, to: u32, price: &str) -> Ticket {
        Ticket::new(
            TrainId::new(train),
            StationId::new(from),
            StationId::new(to),
            Price::parse(price).unwrap(),
            TimeOfDay::parse_hhmmss("08:00:00").unwrap(),
            TimeOfDay::parse_hhmmss("09:00:00").unwrap(),
        )
    }

    fn sid(n: u32) -> StationId {
        StationId::new(n)
    }

    #[test]
    fn every_endpoint_has_a_station() {
        let graph = Graph::from_tickets(vec![ticket(1, 1, 2, "1"), ticket(2, 3, 4, "1")]);

        assert_eq!(graph.len(), 4);
        for id in 1..=4 {
            assert!(graph.station(sid(id)).is_some());
        }
        assert!(graph.station(sid(5)).is_none());
    }

    #[test]
    fn parallel_tickets_kept_in_catalog_order() {
        let graph = Graph::from_tickets(vec![
            ticket(10, 1, 2, "5"),
            ticket(11, 1, 3, "5"),
            ticket(12, 1, 2, "4"),
        ]);

        let station = graph.station(sid(1)).unwrap();
        let trains: Vec<u32> = station
            .tickets_to(sid(2))
            .iter()
            .map(|t| t.train().get())
            .collect();
        assert_eq!(trains, vec![10, 12]);
        assert_eq!(station.destinations().collect::<Vec<_>>(), vec![sid(2), sid(3)]);
        assert_eq!(graph.ticket_count(), 3);
    }

    #[test]
    fn no_tickets_to_unconnected_station() {
        let graph = Graph::from_tickets(vec![ticket(1, 1, 2, "1")]);
        assert!(graph.station(sid(2)).unwrap().tickets_to(sid(1)).is_empty());
    }

    #[test]
    fn isolated_station() {
        let mut graph = Graph::from_tickets(vec![ticket(1, 1, 2, "1")]);
        assert!(graph.add_station(sid(9)));
        assert!(!graph.add_station(sid(9)));
        assert!(!graph.add_station(sid(1)));

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.station(sid(9)).unwrap().tickets().count(), 0);
        // Re-registering an existing station keeps its tickets
        assert_eq!(graph.station(sid(1)).unwrap().tickets().count(), 1);
    }

    #[test]
    fn station_set_covers_graph() {
        let graph = Graph::from_tickets(vec![ticket(1, 3, 1, "1"), ticket(2, 2, 3, "1")]);
        assert_eq!(graph.station_set().to_list(), vec![sid(1), sid(2), sid(3)]);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert!(graph.station_set().is_empty());
    }
}
