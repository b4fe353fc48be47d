//! Deterministic rules of the sorting quiz.
//!
//! `sortquiz-core` turns an input array into a [`Trace`] of recorded steps,
//! judges player moves against that trace and scores the outcome. It performs
//! no I/O and reads no clock, so the runtime and offline tools share the same
//! behavior. Engines are reached through [`AlgorithmKey::engine`].
pub mod algorithm;
pub mod config;
pub mod error;
pub mod scoring;
pub mod step;

pub use algorithm::{
    AlgorithmKey, BubbleSort, Complexity, HeapSort, InsertionSort, MergeSort, MoveError,
    QuickSort, SelectionSort, SortAlgorithm, Walkthrough, WalkthroughStep,
};
pub use config::{Difficulty, GameConfig, InputKind};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use scoring::{
    Achievement, EndGameBonus, GameResults, Grade, PlayerStats, accuracy_percent, apply_penalty,
    correct_move_points, efficiency_percent, end_game_bonus, evaluate_achievements, grade,
};
pub use step::{Playback, PlaybackFrame, Step, StepKind, Trace, UserAction};
