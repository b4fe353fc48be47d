//! Game configuration constants, difficulty tiers and input shapes.

/// Scoring and pacing constants shared by the session and the scoring policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Average seconds per correct move under which the speed bonus is paid.
    pub speed_bonus_seconds_per_move: f64,
}

impl GameConfig {
    // ===== scoring =====
    pub const BASE_MOVE_POINTS: u32 = 100;
    pub const STREAK_BONUS_POINTS: u32 = 50;
    /// Streak length (including the current move) that earns the streak bonus.
    pub const STREAK_BONUS_THRESHOLD: u32 = 5;
    pub const INCORRECT_PENALTY: u32 = 50;

    // ===== end-of-game bonuses =====
    pub const PERFECT_BONUS: u32 = 150;
    pub const ACCURACY_BONUS: u32 = 100;
    pub const ACCURACY_BONUS_RATIO: f64 = 0.9;
    pub const SPEED_BONUS: u32 = 200;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPEED_BONUS_SECONDS_PER_MOVE: f64 = 2.0;

    pub fn new() -> Self {
        Self {
            speed_bonus_seconds_per_move: Self::DEFAULT_SPEED_BONUS_SECONDS_PER_MOVE,
        }
    }

    pub fn with_speed_bonus_seconds_per_move(seconds: f64) -> Self {
        Self {
            speed_bonus_seconds_per_move: seconds,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Difficulty tier, selecting array size and score multiplier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Number of elements in generated arrays.
    pub const fn array_size(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 8,
            Self::Hard => 12,
            Self::Expert => 16,
        }
    }

    /// Multiplier applied to every correct-move score.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
            Self::Expert => 3.0,
        }
    }

    /// Display name ("Easy", "Expert", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

/// Shape of the generated input array.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InputKind {
    /// Distinct values drawn from 1..=10×size.
    #[default]
    Random,
    /// Strictly descending multiples of 10.
    Reversed,
    /// Ascending multiples of 10 disturbed by a few random swaps.
    NearlySorted,
    /// Few distinct multiples of 10 with repetition.
    Duplicates,
}

impl InputKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Reversed => "Reversed",
            Self::NearlySorted => "Nearly Sorted",
            Self::Duplicates => "Duplicates",
        }
    }
}
