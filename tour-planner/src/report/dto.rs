//! Data transfer objects for JSON reports.

use serde::Serialize;

use crate::domain::{Ticket, format_span};
use crate::planner::{Itinerary, ItineraryLeg, Objective, PlanResult};

/// A full JSON report.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    /// Objective the itineraries were optimised for
    pub objective: Objective,

    /// All optimal itineraries
    pub itineraries: Vec<ItineraryResult>,
}

/// One optimal itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Station IDs in visiting order
    pub stations: Vec<u32>,

    /// Total price ("15.00") or duration ("23h0m0s")
    pub total: String,

    /// Legs in travelling order
    pub legs: Vec<LegResult>,
}

/// One leg with its alternatives.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Origin station ID
    pub from: u32,

    /// Destination station ID
    pub to: u32,

    /// Traveller's clock at the origin, absent on the first leg
    pub ready_at: Option<String>,

    /// Ticket chosen by the search
    pub ticket: TicketResult,

    /// All equally good tickets, the chosen one included
    pub alternatives: Vec<TicketResult>,
}

/// A ticket.
#[derive(Debug, Serialize)]
pub struct TicketResult {
    /// Train ID
    pub train: u32,

    /// Origin station ID
    pub from: u32,

    /// Destination station ID
    pub to: u32,

    /// Price with two decimal places
    pub price: String,

    /// Departure time (HH:MM:SS)
    pub departure: String,

    /// Arrival time (HH:MM:SS), possibly on the next day
    pub arrival: String,

    /// Ride time, excluding any wait ("3h15m0s")
    pub duration: String,
}

impl PlanReport {
    /// Create from a planner result.
    pub fn from_plan(plan: &PlanResult<'_>) -> Self {
        Self {
            objective: plan.objective,
            itineraries: plan
                .itineraries
                .iter()
                .map(ItineraryResult::from_itinerary)
                .collect(),
        }
    }
}

impl ItineraryResult {
    /// Create from a planner itinerary.
    pub fn from_itinerary(itinerary: &Itinerary<'_>) -> Self {
        Self {
            stations: itinerary.stations().iter().map(|s| s.get()).collect(),
            total: itinerary.total().to_string(),
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    /// Create from an itinerary leg.
    pub fn from_leg(leg: &ItineraryLeg<'_>) -> Self {
        Self {
            from: leg.origin().get(),
            to: leg.destination().get(),
            ready_at: leg.ready_at().map(|t| t.to_string()),
            ticket: TicketResult::from_ticket(leg.ticket()),
            alternatives: leg
                .alternatives()
                .iter()
                .map(|t| TicketResult::from_ticket(t))
                .collect(),
        }
    }
}

impl TicketResult {
    /// Create from a domain Ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            train: ticket.train().get(),
            from: ticket.origin().get(),
            to: ticket.destination().get(),
            price: ticket.price().to_string(),
            departure: ticket.departure().to_string(),
            arrival: ticket.arrival().to_string(),
            duration: format_span(ticket.duration()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, StationId, TimeOfDay, TrainId};
    use crate::network::Graph;
    use crate::planner::{Planner, SearchConfig};

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    fn ticket(train: u32, from: u32, to: u32, dep: &str, arr: &str) -> Ticket {
        Ticket::new(
            TrainId::new(train),
            StationId::new(from),
            StationId::new(to),
            Price::parse("10").unwrap(),
            t(dep),
            t(arr),
        )
    }

    #[test]
    fn ticket_result_fields() {
        let result = TicketResult::from_ticket(&ticket(4, 1, 2, "22:00:00", "01:15:00"));

        assert_eq!(result.train, 4);
        assert_eq!(result.from, 1);
        assert_eq!(result.to, 2);
        assert_eq!(result.price, "10.00");
        assert_eq!(result.departure, "22:00:00");
        assert_eq!(result.arrival, "01:15:00");
        assert_eq!(result.duration, "3h15m0s");
    }

    #[test]
    fn plan_report_serializes() {
        let graph = Graph::from_tickets(vec![
            ticket(1, 1, 2, "08:00:00", "09:00:00"),
            ticket(2, 2, 3, "10:00:00", "11:00:00"),
        ]);
        let config = SearchConfig::default();
        let plan = Planner::new(&graph, &config).plan().unwrap();

        let report = PlanReport::from_plan(&plan);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["objective"], "cost");
        assert_eq!(json["itineraries"][0]["stations"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["itineraries"][0]["total"], "20.00");
        assert!(json["itineraries"][0]["legs"][0]["ready_at"].is_null());
        assert_eq!(json["itineraries"][0]["legs"][1]["ready_at"], "09:00:00");
        assert_eq!(json["itineraries"][0]["legs"][1]["alternatives"][0]["train"], 2);
    }
}
