//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use sortquiz_core::{Difficulty, GameConfig, InputKind};

use crate::api::{Result, RuntimeError};

/// Settings a front end needs to run games and persist progress.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fixed RNG seed for reproducible arrays; entropy when unset.
    pub seed: Option<u64>,
    /// Stats file location; the platform data directory when unset.
    pub stats_path: Option<PathBuf>,
    pub difficulty: Difficulty,
    pub input_kind: InputKind,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SORTQUIZ_SEED` - RNG seed for generated arrays (default: entropy)
    /// - `SORTQUIZ_STATS_PATH` - Stats JSON file (default: platform data dir)
    /// - `SORTQUIZ_DIFFICULTY` - easy, medium, hard or expert (default: easy)
    /// - `SORTQUIZ_INPUT` - random, reversed, nearly_sorted or duplicates (default: random)
    /// - `SORTQUIZ_SPEED_BONUS_SECONDS` - Per-move time budget for the speed bonus (default: 2.0)
    ///
    /// Unset variables keep their defaults; values that fail to parse are errors.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SORTQUIZ_SEED")? {
            config.seed = Some(seed);
        }
        config.stats_path = env::var("SORTQUIZ_STATS_PATH").ok().map(PathBuf::from);

        if let Some(difficulty) = read_env::<Difficulty>("SORTQUIZ_DIFFICULTY")? {
            config.difficulty = difficulty;
        }
        if let Some(input_kind) = read_env::<InputKind>("SORTQUIZ_INPUT")? {
            config.input_kind = input_kind;
        }
        if let Some(seconds) = read_env::<f64>("SORTQUIZ_SPEED_BONUS_SECONDS")? {
            config.game = GameConfig::with_speed_bonus_seconds_per_move(seconds.max(0.0));
        }

        Ok(config)
    }
}

fn read_env<T>(key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
{
    let Ok(value) = env::var(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidConfig { key, value })
}
