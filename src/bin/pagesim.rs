//! Command-line front end for the page replacement simulator.
//!
//! Prints the frame grid for each selected policy, then a comparison of
//! all of them. With `--max-frames` it also prints each policy's fault
//! curve and flags Belady's anomaly.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim::input::{parse_capacity, parse_policies, parse_references};
use pagesim::report::{render_comparison, render_trace};
use pagesim::{fault_curve, has_belady_anomaly, simulate, simulate_all, DEFAULT_CAPACITY};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Page replacement simulator (FIFO, LRU, Optimal)",
    long_about = "Replay a page reference string against a fixed number of frames.\n\nExamples:\n  pagesim -f 3 7 0 1 2 0 3 0 4 2 3\n  pagesim -f 4 -p lru \"1,2,3,4,1,2,5\"\n  pagesim --max-frames 5 -p fifo 1 2 3 4 1 2 5 1 2 3 4 5"
)]
struct Cli {
    /// Reference string: integers separated by spaces and/or commas.
    #[arg(required = true, allow_hyphen_values = true)]
    references: Vec<String>,

    /// Number of frames.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY.to_string(), allow_hyphen_values = true)]
    frames: String,

    /// Policy to show: fifo, lru, optimal, or all (repeatable). Defaults to all.
    #[arg(short, long)]
    policy: Vec<String>,

    /// Also print fault counts for 1..=N frames (N >= 1).
    #[arg(long)]
    max_frames: Option<usize>,

    /// Skip the per-step grids.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> pagesim::Result<()> {
    let references = parse_references(&cli.references.join(" "))?;
    let capacity = parse_capacity(&cli.frames)?;
    let policies = parse_policies(&cli.policy)?;

    if !cli.quiet {
        for &policy in &policies {
            let sim = simulate(policy, &references, capacity)?;
            println!("{}\n", render_trace(&sim.trace));
        }
    }

    println!("{}", render_comparison(&simulate_all(&references, capacity)?));

    if let Some(max_frames) = cli.max_frames {
        println!();
        for &policy in &policies {
            let curve = fault_curve(policy, &references, 1..=max_frames)?;
            let points: Vec<String> = curve
                .iter()
                .map(|(frames, faults)| format!("{}:{}", frames, faults))
                .collect();
            let anomaly = if has_belady_anomaly(&curve) {
                "  (Belady's anomaly)"
            } else {
                ""
            };
            println!("{:<7} {}{}", policy.name(), points.join(" "), anomaly);
        }
    }

    Ok(())
}
