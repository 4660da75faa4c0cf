//! lemin — route an ant colony from `##start` to `##end` in the fewest turns.
//!
//! The move log is written to stdout, one turn per line.  Path listings
//! (`--paths`) and `tracing` output (`RUST_LOG=debug`) go to stderr.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use af_core::{AssignPolicy, SearchLimits, SelectionStrategy};
use af_graph::load_colony_file;
use af_output::{CsvWriter, MoveLogObserver, TextWriter, format_path};
use af_sim::{FarmBuilder, SimObserver};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lemin", version, about = "Route an ant colony in the fewest turns")]
struct Args {
    /// Colony description file
    colony: PathBuf,

    /// Path selection: `greedy` or `maximum`
    #[arg(long, default_value_t = SelectionStrategy::Greedy)]
    selection: SelectionStrategy,

    /// Ant assignment: `shortest-first` or `round-robin`
    #[arg(long, default_value_t = AssignPolicy::ShortestFirst)]
    assignment: AssignPolicy,

    /// Stop enumerating after this many paths
    #[arg(long)]
    max_paths: Option<usize>,

    /// Print enumerated and selected paths to stderr
    #[arg(long)]
    paths: bool,

    /// Also write `moves.csv` into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

impl Args {
    fn limits(&self) -> SearchLimits {
        SearchLimits { max_paths: self.max_paths, ..SearchLimits::UNBOUNDED }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let colony = load_colony_file(&args.colony)
        .with_context(|| format!("loading {}", args.colony.display()))?;
    info!(
        ants = colony.agent_count,
        rooms = colony.graph.room_count(),
        links = colony.graph.link_count(),
        "colony loaded"
    );

    let farm = FarmBuilder::from_colony(colony)
        .limits(args.limits())
        .selection(args.selection)
        .assignment(args.assignment)
        .build()?;

    let t0 = Instant::now();
    let stdout = io::stdout().lock();
    let mut text = MoveLogObserver::new(TextWriter::new(stdout), farm.graph());
    let solution = farm.solve(&mut text);
    if let Some(e) = text.take_error() {
        return Err(e).context("writing move log");
    }
    let elapsed = t0.elapsed();

    if let Some(dir) = &args.csv {
        let mut csv = MoveLogObserver::new(CsvWriter::new(dir)?, farm.graph());
        for (i, turn) in solution.turns.iter().enumerate() {
            csv.on_turn_end(i + 1, turn);
        }
        csv.on_sim_end(solution.turn_count());
        if let Some(e) = csv.take_error() {
            return Err(e).context("writing moves.csv");
        }
    }

    if args.paths {
        let graph = farm.graph();
        eprintln!("All paths from {} to {}:", graph.name(farm.start()), graph.name(farm.end()));
        for path in &solution.paths {
            eprintln!("Path: {}, Total Distance: {:.2}", format_path(path, graph), path.distance(graph));
        }
        eprintln!();
        eprintln!("Selected non-overlapping paths:");
        for (i, path) in solution.selected.iter().enumerate() {
            let ants = solution.assignment.loads().get(i).copied().unwrap_or(0);
            eprintln!("{} ({ants} ants)", format_path(path, graph));
        }
        eprintln!();
    }

    if solution.is_unroutable() {
        eprintln!("no route from start to end");
    }
    info!(
        turns = solution.turn_count(),
        moves = solution.move_count(),
        elapsed_secs = elapsed.as_secs_f64(),
        "solved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lemin", "colony.txt"]).unwrap();
        assert_eq!(args.colony, PathBuf::from("colony.txt"));
        assert_eq!(args.selection, SelectionStrategy::Greedy);
        assert_eq!(args.assignment, AssignPolicy::ShortestFirst);
        assert_eq!(args.limits(), SearchLimits::UNBOUNDED);
        assert!(!args.paths);
        assert!(args.csv.is_none());
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "lemin", "colony.txt",
            "--selection", "maximum",
            "--assignment", "round-robin",
            "--max-paths", "500",
            "--paths",
            "--csv", "out",
        ])
        .unwrap();
        assert_eq!(args.selection, SelectionStrategy::Maximum);
        assert_eq!(args.assignment, AssignPolicy::RoundRobin);
        assert_eq!(args.limits().max_paths, Some(500));
        assert!(args.paths);
        assert_eq!(args.csv, Some(PathBuf::from("out")));
    }

    #[test]
    fn bad_input_rejected() {
        assert!(Args::try_parse_from(["lemin"]).is_err());
        assert!(Args::try_parse_from(["lemin", "c.txt", "--selection", "best"]).is_err());
        assert!(Args::try_parse_from(["lemin", "c.txt", "--bogus"]).is_err());
    }
}
