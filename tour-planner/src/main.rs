use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tour_planner::catalog::read_catalog;
use tour_planner::network::Graph;
use tour_planner::planner::{Objective, Planner, SearchConfig};
use tour_planner::report::{ReportFormat, file_sha256, price_matrix, to_dot, write_report};

/// Find the cheapest or fastest tour through every station in a ticket catalog.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Ticket catalog, one `{train;from;to;price;HH:MM:SS;HH:MM:SS}` per line
    input: PathBuf,

    /// Where to write the report
    output: PathBuf,

    /// What to optimise
    #[arg(short, long, value_enum, default_value_t = Objective::Cost)]
    objective: Objective,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Also write the station graph as Graphviz DOT to this path
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Refuse catalogs with more stations than this
    #[arg(long, default_value_t = SearchConfig::default().max_stations)]
    max_stations: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load tickets and build the graph
    let tickets = read_catalog(&args.input)?;
    let graph = Graph::from_tickets(tickets);
    info!(
        stations = graph.len(),
        tickets = graph.ticket_count(),
        "loaded catalog"
    );
    debug!("cheapest ticket per station pair:\n{}", price_matrix(&graph));

    if let Some(path) = &args.dot {
        let name = args
            .input
            .file_stem()
            .map_or_else(|| "tour".to_string(), |s| s.to_string_lossy().into_owned());
        std::fs::write(path, to_dot(&graph, &name, args.objective))
            .with_context(|| format!("failed to write graph to {}", path.display()))?;
        info!(path = %path.display(), "wrote station graph");
    }

    // Search
    let config = SearchConfig::new(args.objective, args.max_stations);
    let plan = Planner::new(&graph, &config).plan()?;

    match plan.itineraries.first() {
        Some(best) => info!(
            objective = %plan.objective,
            total = %best.total(),
            itineraries = plan.itineraries.len(),
            "found optimal tours"
        ),
        None => info!(objective = %plan.objective, "no tour visits every station"),
    }

    // Write the report
    write_report(&args.output, &plan, args.format)?;
    let digest = file_sha256(&args.output)
        .with_context(|| format!("failed to hash {}", args.output.display()))?;
    info!(path = %args.output.display(), sha256 = %digest, "wrote report");

    Ok(())
}
