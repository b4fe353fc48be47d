//! Scoring policy - pure functions from play statistics to points.
//!
//! Nothing here knows about a specific algorithm. The session feeds it streak
//! and timing figures; results and achievements are derived from its output.

mod achievements;
mod results;

pub use achievements::{Achievement, PlayerStats, evaluate_achievements};
pub use results::GameResults;

use crate::config::{Difficulty, GameConfig};

/// Letter grade for a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

/// Thresholds on the difficulty-normalized score, best grade first.
const GRADE_THRESHOLDS: [(f64, Grade); 5] = [
    (1500.0, Grade::S),
    (1200.0, Grade::A),
    (900.0, Grade::B),
    (600.0, Grade::C),
    (300.0, Grade::D),
];

/// End-of-game bonus breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndGameBonus {
    pub perfect: u32,
    pub accuracy: u32,
    pub speed: u32,
}

impl EndGameBonus {
    pub fn total(&self) -> u32 {
        self.perfect + self.accuracy + self.speed
    }
}

/// Points for a correct move. `streak` counts consecutive correct moves
/// including this one, so the fifth in a row is the first to earn the bonus.
pub fn correct_move_points(difficulty: Difficulty, streak: u32) -> u32 {
    let streak_bonus = if streak >= GameConfig::STREAK_BONUS_THRESHOLD {
        GameConfig::STREAK_BONUS_POINTS
    } else {
        0
    };
    (f64::from(GameConfig::BASE_MOVE_POINTS + streak_bonus) * difficulty.multiplier()).round()
        as u32
}

/// Score after a wrong move; never below zero.
pub fn apply_penalty(score: u32) -> u32 {
    score.saturating_sub(GameConfig::INCORRECT_PENALTY)
}

/// Bonuses granted once the trace is exhausted.
///
/// Perfect (no mistakes, at least one correct move) and accuracy (≥ 90 %)
/// are exclusive; the speed bonus is paid on top when the average time per
/// correct move stays under the configured budget.
pub fn end_game_bonus(
    config: &GameConfig,
    correct: u32,
    incorrect: u32,
    elapsed_seconds: f64,
) -> EndGameBonus {
    let mut bonus = EndGameBonus::default();
    let attempts = correct + incorrect;

    if incorrect == 0 && correct > 0 {
        bonus.perfect = GameConfig::PERFECT_BONUS;
    } else if attempts > 0
        && f64::from(correct) / f64::from(attempts) >= GameConfig::ACCURACY_BONUS_RATIO
    {
        bonus.accuracy = GameConfig::ACCURACY_BONUS;
    }

    if correct > 0 && elapsed_seconds / f64::from(correct) < config.speed_bonus_seconds_per_move {
        bonus.speed = GameConfig::SPEED_BONUS;
    }

    bonus
}

/// Percentage of attempted moves that were correct; 100 when nothing was attempted.
pub fn accuracy_percent(correct: u32, incorrect: u32) -> u32 {
    let attempts = correct + incorrect;
    if attempts == 0 {
        return 100;
    }
    (f64::from(correct) / f64::from(attempts) * 100.0).round() as u32
}

/// Optimal swap count relative to correct moves, capped at 100.
pub fn efficiency_percent(optimal_swaps: usize, correct: u32) -> u32 {
    if optimal_swaps == 0 {
        return 100;
    }
    if correct == 0 {
        return 0;
    }
    let ratio = optimal_swaps as f64 / f64::from(correct) * 100.0;
    ratio.round().min(100.0) as u32
}

/// Grade of a final score, normalized by the difficulty multiplier.
pub fn grade(score: u32, difficulty: Difficulty) -> Grade {
    let normalized = f64::from(score) / difficulty.multiplier();
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| normalized >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}
