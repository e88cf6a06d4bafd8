//! Run every algorithm over a directory of puzzles and write a report

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use aima::batch::{Batch, Part};
use aima::search::SearchLimits;
use aima::solver::Solver;
use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "batch", about = "Batch 8-puzzle runs with per-case or averaged statistics")]
struct Args {
    /// Directory of puzzle files (part2) or of L8/L15/L24 buckets (part3)
    dir: PathBuf,

    /// part2 or part3
    part: Part,

    /// Report file; defaults to part2.txt or part3.txt
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Wall-clock budget per case
    #[arg(long, default_value_t = 900)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let out_path = args
        .out
        .unwrap_or_else(|| PathBuf::from(args.part.default_output()));
    let file = File::create(&out_path)
        .with_context(|| format!("cannot create {}", out_path.display()))?;
    let mut out = BufWriter::new(file);

    let solver = Solver::new(SearchLimits::with_timeout(Duration::from_secs(args.timeout_secs)));
    Batch::new(solver).run(args.part, &args.dir, &mut out)?;
    out.flush()?;

    println!("{} report written to {}", args.part, out_path.display());
    Ok(())
}
