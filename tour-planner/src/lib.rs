//! Train tour planner.
//!
//! Reads a catalog of train tickets and finds the tours that visit every
//! station exactly once at the lowest total price or the shortest total
//! travel time, listing the interchangeable tickets for each leg.

pub mod catalog;
pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
