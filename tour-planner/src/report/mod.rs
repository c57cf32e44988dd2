//! Rendering planner results to files.

mod dto;
mod graphviz;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::planner::{Itinerary, PlanResult};

pub use dto::{ItineraryResult, LegResult, PlanReport, TicketResult};
pub use graphviz::{price_matrix, to_dot};

/// Written in place of itineraries when no tour exists.
pub const NO_ITINERARY: &str = "no complete itinerary";

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one block per itinerary.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors that can occur when writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    fn io(path: &Path, source: io::Error) -> Self {
        ReportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Render every itinerary as text.
///
/// Each itinerary is a header line with its index and total, followed by
/// its legs. A leg lists the chosen ticket and then its alternatives.
pub fn render_text(plan: &PlanResult<'_>) -> String {
    if plan.itineraries.is_empty() {
        return format!("{NO_ITINERARY}\n");
    }

    plan.itineraries
        .iter()
        .enumerate()
        .map(|(i, itinerary)| format!("{i}: {}\n{}\n", itinerary.total(), render_legs(itinerary)))
        .collect()
}

fn render_legs(itinerary: &Itinerary<'_>) -> String {
    let legs: Vec<String> = itinerary
        .legs()
        .iter()
        .map(|leg| {
            let tickets: Vec<String> = std::iter::once(leg.ticket())
                .chain(
                    leg.alternatives()
                        .iter()
                        .copied()
                        .filter(|alt| !std::ptr::eq(*alt, leg.ticket())),
                )
                .map(|ticket| ticket.to_string())
                .collect();
            format!("[{}]", tickets.join("; "))
        })
        .collect();

    format!("[{}]", legs.join(";\n "))
}

/// Render the plan as pretty-printed JSON.
pub fn render_json(plan: &PlanResult<'_>) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&PlanReport::from_plan(plan))?)
}

/// Write the plan to `path` in the given format, replacing any existing file.
pub fn write_report(
    path: &Path,
    plan: &PlanResult<'_>,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let body = match format {
        ReportFormat::Text => render_text(plan),
        ReportFormat::Json => render_json(plan)?,
    };

    fs::write(path, body).map_err(|e| ReportError::io(path, e))?;
    debug!(path = %path.display(), ?format, "wrote report");
    Ok(())
}

/// SHA-256 of a file's contents as lowercase hex.
pub fn file_sha256(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
