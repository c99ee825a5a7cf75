//! tabu-tsp CLI: run Tabu Search on an adjacency-matrix file.

use std::path::{Path, PathBuf};

use clap::Parser;
use tabu_tsp::construct::DEFAULT_MAX_RETRIES;
use tabu_tsp::graph::load_graph;
use tabu_tsp::report::{graph_table, search_report};
use tabu_tsp::tabu::{TabuConfig, TabuRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tabu-tsp")]
#[command(about = "Tabu search for the Traveling Salesman Problem")]
#[command(version)]
struct Cli {
    /// Adjacency-matrix file: vertex count on the first line, then one row per line
    input: PathBuf,

    /// Capacity of the tabu list
    #[arg(short, long)]
    tabu_size: usize,

    /// Number of search iterations
    #[arg(short, long)]
    max_iter: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Extra backtracking attempts for the initial tour
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// Skip printing the graph table
    #[arg(long)]
    no_table: bool,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    enable_tracing();
    let cli = Cli::parse();

    if let Err(e) = cmd_solve(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_solve(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(&cli.input)?;

    let mut config = TabuConfig::default()
        .with_tabu_size(cli.tabu_size)
        .with_max_iterations(cli.max_iter)
        .with_max_retries(cli.max_retries);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if !cli.no_table {
        println!("{}", graph_table(&graph));
    }

    let result = TabuRunner::run(&graph, &config)?;
    println!("{}", search_report(&display_name(&cli.input), &config, &result));
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
