//! Runtime orchestration for the sorting quiz.
//!
//! This crate wires the pure rules of `sortquiz-core` to the outside world:
//! random input arrays, the wall clock and persistent player progress.
//! Consumers drive a [`GameSession`] and hand its results to a
//! [`ProgressTracker`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the game state machine
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] and [`progress`] persist stats and achievements
//! - [`config`], [`clock`] and [`input`] are the session's collaborators
pub mod api;
pub mod clock;
pub mod config;
pub mod input;
pub mod progress;
pub mod repository;
pub mod session;

#[cfg(test)]
mod tests_support;

pub use api::{Result, RuntimeError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RuntimeConfig;
pub use input::generate_input;
pub use progress::ProgressTracker;
pub use repository::{
    FileStatsRepository, InMemoryStatsRepo, RepositoryError, StatsDocument, StatsRepository,
};
pub use session::{CUSTOM_INPUT_LABEL, GameSession, Hint, MoveOutcome, SessionPhase};
