//! Subcommands and the options they share.

mod demo;
mod explain;
mod play;
mod stats;

pub use demo::Demo;
pub use explain::Explain;
pub use play::Play;
pub use stats::Stats;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use sortquiz_core::{AlgorithmKey, Difficulty, InputKind};
use sortquiz_runtime::{FileStatsRepository, ProgressTracker, RuntimeConfig};

/// Which algorithm runs on which array.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Algorithm: bubble, selection, insertion, merge, quick or heap
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: AlgorithmKey,

    /// Difficulty: easy, medium, hard or expert [env: SORTQUIZ_DIFFICULTY]
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Input shape: random, reversed, nearly_sorted or duplicates [env: SORTQUIZ_INPUT]
    #[arg(short, long)]
    pub input: Option<InputKind>,

    /// Explicit array, comma separated (overrides --input)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub array: Option<Vec<i32>>,

    /// RNG seed for reproducible arrays [env: SORTQUIZ_SEED]
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameArgs {
    /// Environment configuration with command line overrides applied.
    pub fn runtime_config(&self) -> Result<RuntimeConfig> {
        let mut config = RuntimeConfig::from_env().context("Invalid SORTQUIZ_* environment")?;
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(input) = self.input {
            config.input_kind = input;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Where progress is stored.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Stats file [env: SORTQUIZ_STATS_PATH] [default: platform data directory]
    #[arg(long)]
    pub stats_path: Option<PathBuf>,
}

impl StatsArgs {
    pub fn open_tracker(&self, config: &RuntimeConfig) -> Result<ProgressTracker> {
        let path = self
            .stats_path
            .clone()
            .or_else(|| config.stats_path.clone())
            .unwrap_or_else(FileStatsRepository::default_path);
        let repository = FileStatsRepository::open(&path)
            .with_context(|| format!("Failed to open stats file: {}", path.display()))?;
        Ok(ProgressTracker::new(Arc::new(repository)))
    }
}
