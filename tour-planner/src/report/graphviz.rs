//! Station graph export: Graphviz DOT and the cheapest-ticket matrix.

use std::fmt::Write;

use crate::domain::format_span;
use crate::network::Graph;
use crate::planner::{ByCost, Criterion, Objective};

/// Render the graph as a Graphviz digraph, one edge per ticket.
///
/// Edges are labelled with the ticket's price or ride duration depending
/// on `objective`. Spaces in `name` become underscores.
///
/// # Examples
///
/// ```
/// use tour_planner::catalog::parse_catalog;
/// use tour_planner::network::Graph;
/// use tour_planner::planner::Objective;
/// use tour_planner::report::to_dot;
///
/// let tickets = parse_catalog("1;10;20;5;08:00:00;09:00:00".as_bytes()).unwrap();
/// let dot = to_dot(&Graph::from_tickets(tickets), "my tour", Objective::Cost);
/// assert!(dot.starts_with("digraph my_tour {"));
/// assert!(dot.contains("\"10\" -> \"20\" [ label = \"5.00, train: 1\" ]"));
/// ```
pub fn to_dot(graph: &Graph, name: &str, objective: Objective) -> String {
    let mut dot = format!("digraph {} {{\n", name.replace(' ', "_"));

    for station in graph.stations() {
        let _ = writeln!(dot, "\"{}\"", station.id());

        for ticket in station.tickets() {
            let label = match objective {
                Objective::Cost => ticket.price().to_string(),
                Objective::Duration => format_span(ticket.duration()),
            };
            let _ = writeln!(
                dot,
                "\"{}\" -> \"{}\" [ label = \"{}, train: {}\" ]",
                ticket.origin(),
                ticket.destination(),
                label,
                ticket.train()
            );
        }
    }

    dot.push('}');
    dot
}

/// Render the cheapest ticket price for every ordered station pair.
///
/// Rows are origins, columns destinations, both in ascending ID order;
/// `-` marks a pair with no direct ticket.
pub fn price_matrix(graph: &Graph) -> String {
    let mut out = String::from("\t");
    for station in graph.stations() {
        let _ = write!(out, "{}\t", station.id());
    }
    out.push('\n');

    for from in graph.stations() {
        let _ = write!(out, "{}\t", from.id());
        for to in graph.stations() {
            match ByCost.best_ticket(from, to.id(), None) {
                Some((_, price)) => {
                    let _ = write!(out, "{price}\t");
                }
                None => out.push_str("-\t"),
            }
        }
        out.push('\n');
    }

    out
}
