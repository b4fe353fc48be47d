use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sortquiz_core::Achievement;
use sortquiz_runtime::{RuntimeConfig, StatsDocument};
use strum::IntoEnumIterator;

use super::StatsArgs;
use crate::render;

/// Show lifetime stats and achievements
#[derive(Parser, Debug)]
pub struct Stats {
    #[command(flatten)]
    pub stats: StatsArgs,

    /// Print the stored document as JSON
    #[arg(long)]
    pub json: bool,
}

impl Stats {
    pub fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env().context("Invalid SORTQUIZ_* environment")?;
        let tracker = self.stats.open_tracker(&config)?;
        let document = StatsDocument {
            stats: tracker.stats()?,
            achievements: tracker.achievements()?,
        };

        let mut stdout = io::stdout();
        if self.json {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&document)?)?;
            return Ok(());
        }

        write!(stdout, "{}", render::stats(&document.stats))?;
        writeln!(stdout)?;
        writeln!(
            stdout,
            "achievements {}/{}",
            document.achievements.len(),
            Achievement::iter().count()
        )?;
        for achievement in Achievement::iter() {
            let earned = document.achievements.contains(&achievement);
            writeln!(stdout, "{}", render::achievement(achievement, earned))?;
        }
        Ok(())
    }
}
