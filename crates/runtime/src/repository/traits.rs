//! Repository contract for the player's cumulative progress.

use std::collections::BTreeSet;

use sortquiz_core::{Achievement, GameResults, PlayerStats};

use super::Result;

/// Persistent store for lifetime stats and earned achievements.
///
/// Injected into [`ProgressTracker`](crate::ProgressTracker); nothing in the
/// runtime reaches for a global store.
pub trait StatsRepository: Send + Sync {
    /// Current lifetime stats (defaults when nothing was recorded yet).
    fn stats(&self) -> Result<PlayerStats>;

    /// Folds a finished game into the stats and returns the updated totals.
    fn update_stats(&self, results: &GameResults) -> Result<PlayerStats>;

    /// Achievements earned so far.
    fn achievements(&self) -> Result<BTreeSet<Achievement>>;

    /// Marks achievements as earned. Already earned ids are ignored.
    fn add_achievements(&self, achievements: &[Achievement]) -> Result<()>;
}
