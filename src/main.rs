//! Gomoku GUI
//!
//! Play White against the alpha-beta engine, or watch it face the preset
//! script.

use aima::eval::EvalFn;
use aima::ui::{GomokuApp, MatchSettings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku against an alpha-beta engine")]
struct Args {
    /// White plays the built-in move script
    #[arg(long)]
    preset: bool,

    /// Evaluation function: 1 or 2
    #[arg(long, default_value_t = EvalFn::Two)]
    eval: EvalFn,

    /// Search depth
    #[arg(long, default_value_t = aima::search::DEFAULT_MAX_DEPTH)]
    depth: u8,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = MatchSettings {
        eval: args.eval,
        max_depth: args.depth,
        use_preset: args.preset,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, settings)))),
    )
}
