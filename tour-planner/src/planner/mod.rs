//! Tour planner using exhaustive backtracking search.
//!
//! This module answers: "in which order, starting where, can I ride to
//! every station in the catalog exactly once as cheaply (or as quickly)
//! as possible?"
//!
//! The search tries every start station and every order of the remaining
//! stations, keeps every tour tied for the best total, and then lists, for
//! each leg, all tickets that are exactly as good as the one chosen.

mod config;
mod criterion;
mod itinerary;
mod search;

pub use config::{Objective, SearchConfig};
pub use criterion::{ByCost, ByDuration, Criterion};
pub use itinerary::{Itinerary, ItineraryLeg, Total, resolve};
pub use search::{
    PlanResult, Planner, Route, RouteLeg, SearchError, SearchOutcome, SearchStats, search,
    search_by_cost, search_by_duration,
};
