//! Solve one 8-puzzle file with the chosen algorithm

use std::path::PathBuf;
use std::time::Duration;

use aima::search::SearchLimits;
use aima::solver::{Algorithm, OutputFormat, Solver};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "puzzle", about = "Solve an 8-puzzle with BFS, IDS or A*")]
struct Args {
    /// Puzzle file: nine tokens (digits 1-8 and `_` for the blank)
    file: PathBuf,

    /// One of bfs, ids, h1, h2, h3
    algorithm: Algorithm,

    /// `part3` prints elapsed seconds and node count only
    format: Option<String>,

    /// Wall-clock budget for the search
    #[arg(long, default_value_t = 900)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let format = match args.format.as_deref() {
        Some(f) if f.eq_ignore_ascii_case("part3") => OutputFormat::Machine,
        _ => OutputFormat::Human,
    };

    let solver = Solver::new(SearchLimits::with_timeout(Duration::from_secs(args.timeout_secs)));
    let report = solver.solve_file(&args.file, args.algorithm)?;
    println!("{}", report.render(format));
    Ok(())
}
