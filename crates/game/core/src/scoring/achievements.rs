//! Achievement catalog evaluated against cumulative player stats.

use std::collections::{BTreeMap, BTreeSet};

use strum::IntoEnumIterator;

use super::GameResults;
use crate::algorithm::AlgorithmKey;
use crate::config::Difficulty;

/// Lifetime statistics accumulated over completed games.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    pub games_completed: u32,
    pub perfect_games: u32,
    /// Shortest completion time in seconds.
    pub fastest_time: Option<f64>,
    pub max_streak: u32,
    pub algorithms_tried: BTreeSet<AlgorithmKey>,
    pub algorithm_completions: BTreeMap<AlgorithmKey, u32>,
    pub difficulty_completions: BTreeMap<Difficulty, u32>,
    pub total_score: u64,
}

impl PlayerStats {
    /// Folds one finished game into the totals.
    pub fn record(&mut self, results: &GameResults) {
        self.games_completed += 1;
        if results.is_perfect() {
            self.perfect_games += 1;
        }
        // A game with no correct move was not played, so its time does not count.
        if results.correct_moves > 0 {
            self.fastest_time = Some(match self.fastest_time {
                Some(fastest) => fastest.min(results.elapsed_seconds),
                None => results.elapsed_seconds,
            });
        }
        self.max_streak = self.max_streak.max(results.max_streak);
        self.algorithms_tried.insert(results.algorithm);
        *self
            .algorithm_completions
            .entry(results.algorithm)
            .or_default() += 1;
        *self
            .difficulty_completions
            .entry(results.difficulty)
            .or_default() += 1;
        self.total_score += u64::from(results.score);
    }

    pub fn completions_of(&self, algorithm: AlgorithmKey) -> u32 {
        self.algorithm_completions
            .get(&algorithm)
            .copied()
            .unwrap_or_default()
    }

    pub fn completions_at(&self, difficulty: Difficulty) -> u32 {
        self.difficulty_completions
            .get(&difficulty)
            .copied()
            .unwrap_or_default()
    }
}

/// Fixed achievement catalog. The snake_case name is the persisted id.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Achievement {
    FirstSort,
    Dedicated,
    Perfectionist,
    Flawless,
    SpeedDemon,
    StreakMaster,
    Explorer,
    Specialist,
    ExpertSorter,
    HighScorer,
}

impl Achievement {
    pub const SPEED_DEMON_SECONDS: f64 = 30.0;
    pub const STREAK_MASTER_STREAK: u32 = 10;
    pub const SPECIALIST_COMPLETIONS: u32 = 5;
    pub const HIGH_SCORER_TOTAL: u64 = 10_000;

    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstSort => "First Sort",
            Self::Dedicated => "Dedicated",
            Self::Perfectionist => "Perfectionist",
            Self::Flawless => "Flawless",
            Self::SpeedDemon => "Speed Demon",
            Self::StreakMaster => "Streak Master",
            Self::Explorer => "Explorer",
            Self::Specialist => "Specialist",
            Self::ExpertSorter => "Expert Sorter",
            Self::HighScorer => "High Scorer",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstSort => "Complete your first game",
            Self::Dedicated => "Complete 10 games",
            Self::Perfectionist => "Finish a game without a single mistake",
            Self::Flawless => "Finish 5 games without a single mistake",
            Self::SpeedDemon => "Finish a game in 30 seconds or less",
            Self::StreakMaster => "Make 10 correct moves in a row",
            Self::Explorer => "Play every sorting algorithm",
            Self::Specialist => "Complete the same algorithm 5 times",
            Self::ExpertSorter => "Complete a game on Expert difficulty",
            Self::HighScorer => "Score 10,000 points in total",
        }
    }

    pub fn is_satisfied(self, stats: &PlayerStats) -> bool {
        match self {
            Self::FirstSort => stats.games_completed >= 1,
            Self::Dedicated => stats.games_completed >= 10,
            Self::Perfectionist => stats.perfect_games >= 1,
            Self::Flawless => stats.perfect_games >= 5,
            Self::SpeedDemon => stats
                .fastest_time
                .is_some_and(|seconds| seconds <= Self::SPEED_DEMON_SECONDS),
            Self::StreakMaster => stats.max_streak >= Self::STREAK_MASTER_STREAK,
            Self::Explorer => AlgorithmKey::iter().all(|key| stats.algorithms_tried.contains(&key)),
            Self::Specialist => AlgorithmKey::iter()
                .any(|key| stats.completions_of(key) >= Self::SPECIALIST_COMPLETIONS),
            Self::ExpertSorter => stats.completions_at(Difficulty::Expert) >= 1,
            Self::HighScorer => stats.total_score >= Self::HIGH_SCORER_TOTAL,
        }
    }
}

/// Achievements satisfied by `stats` that are not in `earned`, in catalog order.
pub fn evaluate_achievements(
    stats: &PlayerStats,
    earned: &BTreeSet<Achievement>,
) -> Vec<Achievement> {
    Achievement::iter()
        .filter(|achievement| !earned.contains(achievement))
        .filter(|achievement| achievement.is_satisfied(stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Complexity;
    use crate::config::InputKind;
    use crate::scoring::{EndGameBonus, Grade};

    fn results(algorithm: AlgorithmKey, incorrect: u32, elapsed: f64, score: u32) -> GameResults {
        GameResults {
            algorithm,
            algorithm_name: algorithm.engine().name(),
            difficulty: Difficulty::Easy,
            difficulty_name: Difficulty::Easy.label(),
            input_kind: Some(InputKind::Random),
            input_name: InputKind::Random.label(),
            array_size: 5,
            original_array: vec![5, 4, 3, 2, 1],
            score,
            bonus: EndGameBonus::default(),
            correct_moves: 4,
            incorrect_moves: incorrect,
            optimal_swaps: 4,
            efficiency: 100,
            accuracy: 100,
            elapsed_seconds: elapsed,
            max_streak: 4,
            complexity: Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            grade: Grade::D,
        }
    }

    #[test]
    fn first_game_unlocks_first_sort_once() {
        let mut stats = PlayerStats::default();
        stats.record(&results(AlgorithmKey::Bubble, 1, 45.0, 400));

        let earned = evaluate_achievements(&stats, &BTreeSet::new());
        assert_eq!(earned, vec![Achievement::FirstSort]);

        let already: BTreeSet<_> = earned.into_iter().collect();
        assert!(evaluate_achievements(&stats, &already).is_empty());
    }

    #[test]
    fn perfect_fast_game_unlocks_matching_predicates() {
        let mut stats = PlayerStats::default();
        stats.record(&results(AlgorithmKey::Quick, 0, 12.5, 700));

        let earned = evaluate_achievements(&stats, &BTreeSet::new());
        assert_eq!(
            earned,
            vec![
                Achievement::FirstSort,
                Achievement::Perfectionist,
                Achievement::SpeedDemon
            ]
        );
    }

    #[test]
    fn explorer_needs_all_six_algorithms() {
        let mut stats = PlayerStats::default();
        for key in AlgorithmKey::iter().take(5) {
            stats.record(&results(key, 1, 60.0, 100));
        }
        assert!(!Achievement::Explorer.is_satisfied(&stats));

        stats.record(&results(AlgorithmKey::Heap, 1, 60.0, 100));
        assert!(Achievement::Explorer.is_satisfied(&stats));
        assert_eq!(stats.games_completed, 6);
    }

    #[test]
    fn record_tracks_fastest_time_and_totals() {
        let mut stats = PlayerStats::default();
        stats.record(&results(AlgorithmKey::Merge, 0, 40.0, 5_000));
        stats.record(&results(AlgorithmKey::Merge, 0, 35.5, 5_000));
        stats.record(&results(AlgorithmKey::Merge, 0, 50.0, 0));

        assert_eq!(stats.fastest_time, Some(35.5));
        assert_eq!(stats.total_score, 10_000);
        assert_eq!(stats.completions_of(AlgorithmKey::Merge), 3);
        assert!(Achievement::HighScorer.is_satisfied(&stats));
        assert!(!Achievement::Specialist.is_satisfied(&stats));
    }

    #[test]
    fn game_without_correct_moves_sets_no_fastest_time() {
        let mut skipped = results(AlgorithmKey::Bubble, 0, 1.0, 0);
        skipped.correct_moves = 0;
        skipped.max_streak = 0;

        let mut stats = PlayerStats::default();
        stats.record(&skipped);

        assert_eq!(stats.fastest_time, None);
        assert_eq!(stats.games_completed, 1);
        let earned = evaluate_achievements(&stats, &BTreeSet::new());
        assert_eq!(earned, vec![Achievement::FirstSort]);
    }

    #[test]
    fn ids_are_snake_case() {
        assert_eq!(Achievement::SpeedDemon.as_ref(), "speed_demon");
        assert_eq!(
            "expert_sorter".parse::<Achievement>().unwrap(),
            Achievement::ExpertSorter
        );
    }
}
