//! In-memory StatsRepository implementation for tests and throwaway runs.

use std::collections::BTreeSet;
use std::sync::RwLock;

use sortquiz_core::{Achievement, GameResults, PlayerStats};

use crate::repository::{RepositoryError, Result, StatsDocument, StatsRepository};

/// In-memory implementation of StatsRepository.
pub struct InMemoryStatsRepo {
    document: RwLock<StatsDocument>,
}

impl InMemoryStatsRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_document(StatsDocument::default())
    }

    /// Create pre-populated with existing progress.
    pub fn with_document(document: StatsDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

impl Default for InMemoryStatsRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsRepository for InMemoryStatsRepo {
    fn stats(&self) -> Result<PlayerStats> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.stats.clone())
    }

    fn update_stats(&self, results: &GameResults) -> Result<PlayerStats> {
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        document.stats.record(results);
        Ok(document.stats.clone())
    }

    fn achievements(&self) -> Result<BTreeSet<Achievement>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.achievements.clone())
    }

    fn add_achievements(&self, achievements: &[Achievement]) -> Result<()> {
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        document.achievements.extend(achievements.iter().copied());
        Ok(())
    }
}
