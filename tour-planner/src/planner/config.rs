//! Search configuration for the tour planner.

use std::fmt;

use serde::Serialize;

/// What an itinerary is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Lowest total ticket price.
    Cost,
    /// Shortest total travel time, including waits between trains.
    Duration,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Cost => f.write_str("cost"),
            Objective::Duration => f.write_str("duration"),
        }
    }
}

/// Configuration parameters for a tour search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Objective to optimise.
    pub objective: Objective,

    /// Largest station count the planner will search.
    /// The search is exhaustive, so its running time grows factorially
    /// with the number of stations.
    pub max_stations: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(objective: Objective, max_stations: usize) -> Self {
        Self {
            objective,
            max_stations,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            objective: Objective::Cost,
            max_stations: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.objective, Objective::Cost);
        assert_eq!(config.max_stations, 10);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Objective::Duration, 6);

        assert_eq!(config.objective, Objective::Duration);
        assert_eq!(config.max_stations, 6);
    }

    #[test]
    fn objective_display() {
        assert_eq!(Objective::Cost.to_string(), "cost");
        assert_eq!(Objective::Duration.to_string(), "duration");
    }
}
