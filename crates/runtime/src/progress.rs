//! Folds finished games into persistent progress.

use std::collections::BTreeSet;
use std::sync::Arc;

use sortquiz_core::{Achievement, GameResults, PlayerStats, evaluate_achievements};

use crate::api::Result;
use crate::repository::StatsRepository;

/// Records results through an injected [`StatsRepository`] and reports
/// achievements as they are earned.
#[derive(Clone)]
pub struct ProgressTracker {
    repository: Arc<dyn StatsRepository>,
}

impl ProgressTracker {
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Updates lifetime stats with `results` and returns the achievements
    /// this game unlocked, in catalog order.
    pub fn record(&self, results: &GameResults) -> Result<Vec<Achievement>> {
        let stats = self.repository.update_stats(results)?;
        let earned = self.repository.achievements()?;

        let unlocked = evaluate_achievements(&stats, &earned);
        if !unlocked.is_empty() {
            self.repository.add_achievements(&unlocked)?;
            tracing::info!(
                achievements = ?unlocked.iter().map(|a| a.as_ref()).collect::<Vec<_>>(),
                "achievements unlocked"
            );
        }
        Ok(unlocked)
    }

    pub fn stats(&self) -> Result<PlayerStats> {
        Ok(self.repository.stats()?)
    }

    pub fn achievements(&self) -> Result<BTreeSet<Achievement>> {
        Ok(self.repository.achievements()?)
    }
}
