//! Unified error types surfaced by the runtime API.
//!
//! Move rejections stay [`MoveError`](sortquiz_core::MoveError) values returned
//! by the session; everything here is about session lifecycle, configuration
//! and persistence.
use sortquiz_core::{ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no game is in progress")]
    NotActive,

    #[error("the game has not finished yet")]
    NotComplete,

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActive | Self::NotComplete => ErrorSeverity::Recoverable,
            Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActive => "not-active",
            Self::NotComplete => "not-complete",
            Self::InvalidConfig { .. } => "invalid-config",
            Self::Repository(_) => "repository",
        }
    }
}
