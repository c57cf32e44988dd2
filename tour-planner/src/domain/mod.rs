//! Domain types for the tour planner.
//!
//! This module contains the value types that describe a ticket catalog.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod id;
mod price;
mod ticket;
mod time;

pub use id::{InvalidId, StationId, TrainId};
pub use price::{InvalidPrice, Price};
pub use ticket::Ticket;
pub use time::{TimeError, TimeOfDay, format_span};
