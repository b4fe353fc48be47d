//! Narrated playback of a whole run.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortquiz_core::{Playback, Trace};
use sortquiz_runtime::generate_input;

use super::GameArgs;
use crate::render;

/// Watch an algorithm sort an array step by step
#[derive(Parser, Debug)]
pub struct Demo {
    #[command(flatten)]
    pub game: GameArgs,

    /// Delay between steps in milliseconds
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,

    /// Wait for Enter at every step a player would have to perform
    #[arg(long)]
    pub step: bool,

    /// Print the full trace as JSON instead of narrating it
    #[arg(long)]
    pub json: bool,
}

impl Demo {
    pub fn execute(self) -> Result<()> {
        let config = self.game.runtime_config()?;
        let array = match self.game.array.clone() {
            Some(array) => array,
            None => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                generate_input(
                    config.input_kind,
                    config.difficulty.array_size(),
                    &mut rng,
                )
            }
        };

        let engine = self.game.algorithm.engine();
        let trace = engine.generate_steps(&array);
        tracing::debug!(
            algorithm = %self.game.algorithm,
            steps = trace.len(),
            "demo trace generated"
        );

        let mut stdout = io::stdout();
        if self.json {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&trace)?)?;
            return Ok(());
        }

        writeln!(stdout, "{}", engine.name())?;
        let pacing = Pacing {
            delay: Duration::from_millis(self.delay_ms),
            wait_for_enter: self.step,
        };
        let stdin = io::stdin();
        run_demo(&trace, &pacing, stdin.lock(), &mut stdout)
    }
}

pub struct Pacing {
    pub delay: Duration,
    pub wait_for_enter: bool,
}

/// Narrates `trace` to `out`, pausing before every interactive step.
pub fn run_demo<R: BufRead, W: Write>(
    trace: &Trace,
    pacing: &Pacing,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut playback = Playback::new(trace);
    writeln!(out, "start  {}", render::array(trace.input(), &[]))?;

    while !playback.is_finished() {
        for frame in playback.run_to_pause() {
            writeln!(out, "{}", render::step(frame.step))?;
            wait(pacing.delay);
        }

        let Some(frame) = playback.next() else {
            break;
        };
        if pacing.wait_for_enter {
            write!(out, "[enter] ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
        }
        writeln!(out, "{}", render::step(frame.step))?;
        writeln!(
            out,
            "       {}",
            render::array(playback.current_array(), &render::highlight(frame.step))
        )?;
        wait(pacing.delay);
    }

    writeln!(out, "sorted {}", render::array(playback.current_array(), &[]))?;
    Ok(())
}

fn wait(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
