//! Exhaustive backtracking tour search.
//!
//! For every station as a start, the search walks every order of the
//! remaining stations depth-first, taking the best ticket for each hop
//! under the active [`Criterion`]. Every complete tour is compared with
//! the best found so far across all starts, and all tours tied for the
//! best total are kept.
//!
//! The live path, running total and traveller clock form a single
//! accumulator owned by the search. Whatever a branch pushes onto it is
//! popped again before the branch returns.

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Price, StationId, Ticket, TimeOfDay};
use crate::network::{Graph, Station, UnvisitedSet};

use super::config::{Objective, SearchConfig};
use super::criterion::{ByCost, ByDuration, Criterion};
use super::itinerary::{Itinerary, resolve};

/// Error from tour search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The catalog has more stations than the configured limit
    #[error("catalog has {stations} stations, more than the limit of {limit}")]
    TooManyStations { stations: usize, limit: usize },
}

/// One hop of a route: the ticket taken and the clock it was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLeg<'g> {
    /// Ticket chosen for this hop.
    pub ticket: &'g Ticket,

    /// Traveller's clock at the origin station; `None` on the first hop.
    pub ready_at: Option<TimeOfDay>,
}

/// A complete tour found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'g, W> {
    /// Every station exactly once, in visiting order.
    pub stations: Vec<StationId>,

    /// One leg per consecutive station pair.
    pub legs: Vec<RouteLeg<'g>>,

    /// Total weight of all legs.
    pub total: W,
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Start stations tried.
    pub starts: usize,

    /// Branches entered (one per hop taken).
    pub branches: usize,

    /// Complete tours reached.
    pub complete: usize,
}

/// Result of a raw search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'g, W> {
    /// All tours tied for the best total, in discovery order.
    pub routes: Vec<Route<'g, W>>,

    /// Work counters.
    pub stats: SearchStats,
}

/// Find every cheapest tour of the graph.
pub fn search_by_cost(graph: &Graph) -> Vec<Route<'_, Price>> {
    search(graph, &ByCost).routes
}

/// Find every fastest tour of the graph, counting waits between trains.
pub fn search_by_duration(graph: &Graph) -> Vec<Route<'_, Duration>> {
    search(graph, &ByDuration).routes
}

/// Run the exhaustive search under any criterion.
///
/// Stations are tried as starts, and as next hops, in ascending ID order,
/// so repeated searches return the same tours in the same order. An empty
/// result means no start reaches every station.
pub fn search<'g, C: Criterion>(graph: &'g Graph, criterion: &C) -> SearchOutcome<'g, C::Weight> {
    let mut search = Search::new(graph, criterion);
    search.run();

    SearchOutcome {
        routes: search.routes,
        stats: search.stats,
    }
}

/// Snapshot of the accumulator taken before a hop, used to undo it.
#[derive(Debug, Clone, Copy)]
struct Checkpoint<W> {
    total: W,
    clock: Option<TimeOfDay>,
}

/// The live path, running total and traveller clock.
#[derive(Debug)]
struct Trail<'g, W> {
    stations: Vec<StationId>,
    legs: Vec<RouteLeg<'g>>,
    total: W,
    clock: Option<TimeOfDay>,
    zero: W,
}

impl<'g, W: Copy + PartialEq + std::ops::Add<Output = W>> Trail<'g, W> {
    fn new(zero: W) -> Self {
        Self {
            stations: Vec::new(),
            legs: Vec::new(),
            total: zero,
            clock: None,
            zero,
        }
    }

    /// Place the start station on an empty trail.
    fn begin(&mut self, start: StationId) {
        self.stations.push(start);
    }

    /// Take the start station off again.
    fn end(&mut self) {
        self.stations.pop();
    }

    /// Take `ticket` to its destination.
    fn push(&mut self, ticket: &'g Ticket, weight: W) -> Checkpoint<W> {
        let checkpoint = Checkpoint {
            total: self.total,
            clock: self.clock,
        };

        self.stations.push(ticket.destination());
        self.legs.push(RouteLeg {
            ticket,
            ready_at: self.clock,
        });
        self.total = self.total + weight;
        self.clock = Some(ticket.arrival());

        checkpoint
    }

    /// Undo the hop that produced `checkpoint`.
    fn restore(&mut self, checkpoint: Checkpoint<W>) {
        self.stations.pop();
        self.legs.pop();
        self.total = checkpoint.total;
        self.clock = checkpoint.clock;
    }

    fn snapshot(&self) -> Route<'g, W> {
        Route {
            stations: self.stations.clone(),
            legs: self.legs.clone(),
            total: self.total,
        }
    }

    fn is_clear(&self) -> bool {
        self.stations.is_empty()
            && self.legs.is_empty()
            && self.total == self.zero
            && self.clock.is_none()
    }
}

/// Search state shared by every branch of one search.
struct Search<'g, 'c, C: Criterion> {
    graph: &'g Graph,
    criterion: &'c C,
    trail: Trail<'g, C::Weight>,
    best: Option<C::Weight>,
    routes: Vec<Route<'g, C::Weight>>,
    stats: SearchStats,
}

impl<'g, 'c, C: Criterion> Search<'g, 'c, C> {
    fn new(graph: &'g Graph, criterion: &'c C) -> Self {
        Self {
            graph,
            criterion,
            trail: Trail::new(criterion.zero()),
            best: None,
            routes: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self) {
        let graph = self.graph;
        let all = graph.station_set();

        for start in graph.stations() {
            self.stats.starts += 1;
            let complete_before = self.stats.complete;

            let path: UnvisitedSet = std::iter::once(start.id()).collect();
            let mut remaining = all.difference(&path);

            self.trail.begin(start.id());
            self.extend(start, &mut remaining);
            self.trail.end();

            debug!(
                start = %start.id(),
                complete = self.stats.complete - complete_before,
                best = ?self.best,
                "explored start station"
            );
        }

        debug_assert!(self.trail.is_clear(), "search left state on the trail");
    }

    /// Explore every continuation from `at` through the `remaining` stations.
    ///
    /// `remaining` is handed back exactly as it was received.
    fn extend(&mut self, at: &'g Station, remaining: &mut UnvisitedSet) {
        if remaining.is_empty() {
            self.complete();
            return;
        }

        let graph = self.graph;
        let criterion = self.criterion;

        for next in remaining.to_list() {
            let Some((ticket, weight)) = criterion.best_ticket(at, next, self.trail.clock) else {
                continue;
            };
            let Some(next_station) = graph.station(next) else {
                continue;
            };

            // Weights are never negative, so this branch can only get worse.
            // Equal totals still go ahead to collect ties.
            let total = self.trail.total + weight;
            if matches!(self.best, Some(best) if total > best) {
                continue;
            }

            self.stats.branches += 1;
            let checkpoint = self.trail.push(ticket, weight);
            remaining.remove(next);

            self.extend(next_station, remaining);

            remaining.insert(next);
            self.trail.restore(checkpoint);
        }
    }

    /// Record the trail as a complete tour if it ties or beats the best.
    fn complete(&mut self) {
        // Shorter trails cannot get here, but only full tours may be reported
        if self.trail.stations.len() != self.graph.len() {
            return;
        }
        self.stats.complete += 1;

        let total = self.trail.total;
        match self.best {
            Some(best) if total > best => return,
            Some(best) if total == best => {}
            _ => {
                self.best = Some(total);
                self.routes.clear();
            }
        }

        trace!(
            stations = ?self.trail.stations,
            total = ?total,
            ties = self.routes.len() + 1,
            "recorded optimal tour"
        );
        self.routes.push(self.trail.snapshot());
    }
}

/// Result of planning a tour.
#[derive(Debug, Clone)]
pub struct PlanResult<'g> {
    /// Objective the itineraries were optimised for.
    pub objective: Objective,

    /// All itineraries tied for the best total.
    pub itineraries: Vec<Itinerary<'g>>,

    /// Work counters from the search.
    pub stats: SearchStats,
}

/// Tour planner over a station graph.
///
/// Results borrow tickets from the graph only, so they may outlive the
/// configuration.
pub struct Planner<'g, 'c> {
    graph: &'g Graph,
    config: &'c SearchConfig,
}

impl<'g, 'c> Planner<'g, 'c> {
    /// Create a new planner.
    pub fn new(graph: &'g Graph, config: &'c SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find every optimal tour and annotate each leg with its alternatives.
    pub fn plan(&self) -> Result<PlanResult<'g>, SearchError> {
        if self.graph.len() > self.config.max_stations {
            return Err(SearchError::TooManyStations {
                stations: self.graph.len(),
                limit: self.config.max_stations,
            });
        }

        let (itineraries, stats) = match self.config.objective {
            Objective::Cost => self.plan_with(&ByCost),
            Objective::Duration => self.plan_with(&ByDuration),
        };

        debug!(
            objective = %self.config.objective,
            itineraries = itineraries.len(),
            starts = stats.starts,
            branches = stats.branches,
            complete = stats.complete,
            "tour search complete"
        );

        Ok(PlanResult {
            objective: self.config.objective,
            itineraries,
            stats,
        })
    }

    fn plan_with<C: Criterion>(&self, criterion: &C) -> (Vec<Itinerary<'g>>, SearchStats) {
        let outcome = search(self.graph, criterion);
        let itineraries = outcome
            .routes
            .into_iter()
            .map(|route| resolve(self.graph, criterion, route))
            .collect();

        (itineraries, outcome.stats)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
