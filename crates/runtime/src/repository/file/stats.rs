//! File-based StatsRepository implementation.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use sortquiz_core::{Achievement, GameResults, PlayerStats};

use crate::repository::{RepositoryError, Result, StatsDocument, StatsRepository};

/// File-based implementation of StatsRepository.
///
/// The whole [`StatsDocument`] lives in one pretty-printed JSON file. It is
/// loaded once on open and rewritten after every change through a temp file
/// and an atomic rename, so a crash never leaves a half-written document.
pub struct FileStatsRepository {
    path: PathBuf,
    document: RwLock<StatsDocument>,
}

impl FileStatsRepository {
    const FILE_NAME: &'static str = "stats.json";

    /// Open the document at `path`, starting empty when it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let document = if path.exists() {
            let bytes = fs::read(&path)?;
            let document: StatsDocument = serde_json::from_slice(&bytes)?;
            tracing::debug!("Loaded stats from {}", path.display());
            document
        } else {
            StatsDocument::default()
        };

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    /// Platform data directory location of the stats file.
    ///
    /// - Linux: `~/.local/share/sortquiz/stats.json`
    /// - macOS: `~/Library/Application Support/sortquiz/stats.json`
    /// - Windows: `%APPDATA%\sortquiz\stats.json`
    /// - Fallback: `./save_data/stats.json`
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "sortquiz")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
            .join(Self::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, document: &StatsDocument) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(document)?;
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved stats to {}", self.path.display());
        Ok(())
    }
}

impl StatsRepository for FileStatsRepository {
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
        let mut updated = document.clone();
        updated.stats.record(results);
        self.persist(&updated)?;
        *document = updated;
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
        let mut updated = document.clone();
        updated.achievements.extend(achievements.iter().copied());
        if updated.achievements.len() != document.achievements.len() {
            self.persist(&updated)?;
            *document = updated;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::sample_results;
    use sortquiz_core::AlgorithmKey;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStatsRepository::open(dir.path().join("nested/stats.json")).unwrap();

        assert_eq!(repo.stats().unwrap(), PlayerStats::default());
        assert!(repo.achievements().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn progress_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        {
            let repo = FileStatsRepository::open(&path).unwrap();
            repo.update_stats(&sample_results(AlgorithmKey::Heap, 0))
                .unwrap();
            repo.add_achievements(&[Achievement::FirstSort, Achievement::Perfectionist])
                .unwrap();
        }

        let reopened = FileStatsRepository::open(&path).unwrap();
        let stats = reopened.stats().unwrap();
        assert_eq!(stats.games_completed, 1);
        assert_eq!(stats.completions_of(AlgorithmKey::Heap), 1);
        assert_eq!(
            reopened.achievements().unwrap(),
            BTreeSet::from([Achievement::FirstSort, Achievement::Perfectionist])
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn achievement_ids_are_stored_snake_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let repo = FileStatsRepository::open(&path).unwrap();
        repo.add_achievements(&[Achievement::SpeedDemon]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"speed_demon\""));
    }

    #[test]
    fn failed_write_leaves_memory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let repo = FileStatsRepository::open(&path).unwrap();

        // A directory squatting on the temp path makes the write fail.
        fs::create_dir(path.with_extension("json.tmp")).unwrap();

        assert!(matches!(
            repo.update_stats(&sample_results(AlgorithmKey::Bubble, 0)),
            Err(RepositoryError::Io(_))
        ));
        assert_eq!(repo.stats().unwrap(), PlayerStats::default());

        assert!(repo.add_achievements(&[Achievement::FirstSort]).is_err());
        assert!(repo.achievements().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn corrupted_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, b"{ not json").unwrap();

        let result = FileStatsRepository::open(&path);
        assert!(matches!(result, Err(RepositoryError::Json(_))));
    }
}
