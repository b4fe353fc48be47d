use super::{EndGameBonus, Grade};
use crate::algorithm::{AlgorithmKey, Complexity};
use crate::config::{Difficulty, InputKind};

/// Summary of a finished game, as shown on the results screen and fed into
/// the player's cumulative stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameResults {
    pub algorithm: AlgorithmKey,
    pub algorithm_name: &'static str,
    pub difficulty: Difficulty,
    pub difficulty_name: &'static str,
    /// `None` when the array was supplied by the caller.
    pub input_kind: Option<InputKind>,
    pub input_name: &'static str,
    pub array_size: usize,
    pub original_array: Vec<i32>,
    /// Final score, bonuses included.
    pub score: u32,
    pub bonus: EndGameBonus,
    pub correct_moves: u32,
    pub incorrect_moves: u32,
    pub optimal_swaps: usize,
    pub efficiency: u32,
    pub accuracy: u32,
    /// Seconds, rounded to one decimal.
    pub elapsed_seconds: f64,
    pub max_streak: u32,
    pub complexity: Complexity,
    pub grade: Grade,
}

impl GameResults {
    /// No mistakes and at least one correct move.
    pub fn is_perfect(&self) -> bool {
        self.incorrect_moves == 0 && self.correct_moves > 0
    }
}
