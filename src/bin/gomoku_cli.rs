//! Play Gomoku against the alpha-beta engine in the terminal
//!
//! Moves are entered as 1-based `row col` pairs, e.g. `8 9` or `(8, 9)`.

use std::io::{self, BufRead, Write};

use aima::eval::EvalFn;
use aima::session::Session;
use aima::solver::format_elapsed;
use aima::{GomokuEngine, Pos};
use anyhow::{bail, Context};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gomoku-cli", about = "Play Gomoku against an alpha-beta engine")]
struct Args {
    /// White plays the built-in move script; asked interactively when omitted
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    preset: Option<bool>,

    /// Evaluation function (1 or 2); asked interactively when omitted
    #[arg(long)]
    eval: Option<EvalFn>,

    /// Search depth
    #[arg(long, default_value_t = aima::search::DEFAULT_MAX_DEPTH)]
    depth: u8,
}

fn prompt(input: &mut impl BufRead, question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn read_eval(input: &mut impl BufRead) -> anyhow::Result<EvalFn> {
    loop {
        let answer = prompt(input, "Which evaluation function do you want to use (1 or 2)? ")?;
        match answer.parse() {
            Ok(eval) => return Ok(eval),
            Err(err) => println!("{err}"),
        }
    }
}

fn read_human_move(input: &mut impl BufRead, session: &mut Session) -> anyhow::Result<Pos> {
    println!("Available moves: {}", session.state().moves.len());
    loop {
        let answer = prompt(input, "Your move: ")?;
        let pos = match answer.parse::<Pos>() {
            Ok(pos) => pos,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match session.play_human(pos) {
            Ok(()) => return Ok(pos),
            Err(err) => println!("{err}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let use_preset = match args.preset {
        Some(preset) => preset,
        None => prompt(&mut input, "Are you using the preset (Yes or No)? ")?.eq_ignore_ascii_case("yes"),
    };
    let eval = match args.eval {
        Some(eval) => eval,
        None => read_eval(&mut input)?,
    };

    let mut session = Session::new(GomokuEngine::with_config(eval, args.depth), use_preset);
    println!("{}\n", session.state().board);

    while !session.is_over() {
        if session.is_ai_turn() {
            let result = session.play_ai().context("engine failed to move")?;
            if let Some(pos) = result.best_move {
                println!("Alpha-Beta's move: {pos}");
            }
        } else if session.uses_preset() {
            let Some(pos) = session.next_preset_move() else {
                bail!("preset script exhausted before the game ended");
            };
            session.play_human(pos)?;
            println!("Your move: {pos}");
        } else {
            read_human_move(&mut input, &mut session)?;
        }
        println!("{}\n", session.state().board);
    }

    if let Some(outcome) = session.outcome() {
        println!("{outcome}");
    }
    println!("Time taken: {}", format_elapsed(session.elapsed(), false));
    Ok(())
}
