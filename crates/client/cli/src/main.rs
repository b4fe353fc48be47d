//! Terminal front end for the sorting quiz.
//!
//! Run with: `sortquiz <command>`

mod commands;
mod input;
mod logging;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Demo, Explain, Play, Stats};

/// Learn sorting algorithms by performing their moves yourself
#[derive(Parser)]
#[command(name = "sortquiz")]
#[command(about = "Sorting algorithm quiz", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game: perform every swap (or placement) the algorithm makes
    Play(Play),

    /// Watch an algorithm sort an array step by step
    Demo(Demo),

    /// Show how an algorithm works
    Explain(Explain),

    /// Show lifetime stats and achievements
    Stats(Stats),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _guard = logging::init()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Play(cmd) => cmd.execute(),
        Command::Demo(cmd) => cmd.execute(),
        Command::Explain(cmd) => cmd.execute(),
        Command::Stats(cmd) => cmd.execute(),
    }
}
