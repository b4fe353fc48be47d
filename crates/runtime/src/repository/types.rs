//! Persisted shape of the player's progress.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sortquiz_core::{Achievement, PlayerStats};

/// Everything a stats repository stores: lifetime stats plus earned ids.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsDocument {
    pub stats: PlayerStats,
    pub achievements: BTreeSet<Achievement>,
}
