//! Move validation shared by every engine.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::step::{StepKind, Trace, UserAction};

/// Why a submitted move was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("no step at index {}", .context.step_index.unwrap_or_default())]
    InvalidStepIndex { context: ErrorContext },

    #[error("step {} does not expect a move", .context.step_index.unwrap_or_default())]
    NoActionExpected { context: ErrorContext },

    #[error("expected a {expected} action, got {actual}")]
    WrongActionType {
        expected: StepKind,
        actual: StepKind,
        context: ErrorContext,
    },

    #[error("{message}")]
    IncorrectMove {
        message: String,
        hint: String,
        context: ErrorContext,
    },
}

impl MoveError {
    pub(crate) fn invalid_step_index(step_index: usize) -> Self {
        Self::InvalidStepIndex {
            context: ErrorContext::at_step(step_index),
        }
    }

    pub(crate) fn no_action_expected(step_index: usize) -> Self {
        Self::NoActionExpected {
            context: ErrorContext::at_step(step_index),
        }
    }

    /// Rejections produced by judging the move itself (as opposed to the
    /// cursor position). Only these cost points.
    pub fn is_penalized(&self) -> bool {
        matches!(self, Self::WrongActionType { .. } | Self::IncorrectMove { .. })
    }

    /// Hint derived from the pending step, for incorrect moves.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::IncorrectMove { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::InvalidStepIndex { context }
            | Self::NoActionExpected { context }
            | Self::WrongActionType { context, .. }
            | Self::IncorrectMove { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStepIndex { .. } => "invalid-step-index",
            Self::NoActionExpected { .. } => "no-action-expected",
            Self::WrongActionType { .. } => "wrong-action-type",
            Self::IncorrectMove { .. } => "incorrect-move",
        }
    }
}

pub(crate) fn validate_move(
    algorithm: &str,
    rule: &str,
    trace: &Trace,
    step_index: usize,
    action: &UserAction,
) -> Result<(), MoveError> {
    let step = trace
        .get(step_index)
        .ok_or_else(|| MoveError::invalid_step_index(step_index))?;
    let expected = step
        .expected_action()
        .ok_or_else(|| MoveError::no_action_expected(step_index))?;

    if expected.kind() != action.kind() {
        return Err(MoveError::WrongActionType {
            expected: expected.kind(),
            actual: action.kind(),
            context: ErrorContext::at_step(step_index),
        });
    }

    let matches = match (expected, *action) {
        (
            UserAction::Swap { first, second },
            UserAction::Swap {
                first: given_first,
                second: given_second,
            },
        ) => {
            (first, second) == (given_first, given_second)
                || (first, second) == (given_second, given_first)
        }
        (UserAction::Select { value }, UserAction::Select { value: given }) => value == given,
        _ => false,
    };

    if matches {
        Ok(())
    } else {
        Err(MoveError::IncorrectMove {
            message: format!("Incorrect. In {algorithm}, {rule}."),
            hint: step.description.clone(),
            context: ErrorContext::at_step(step_index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmKey;

    #[test]
    fn swap_pair_is_unordered() {
        let engine = AlgorithmKey::Bubble.engine();
        let trace = engine.generate_steps(&[2, 1]);
        let index = trace.next_user_action(0).unwrap();

        assert!(engine.validate_move(&trace, index, &UserAction::swap(0, 1)).is_ok());
        assert!(engine.validate_move(&trace, index, &UserAction::swap(1, 0)).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_marker_steps() {
        let engine = AlgorithmKey::Bubble.engine();
        let trace = engine.generate_steps(&[2, 1]);

        let err = engine
            .validate_move(&trace, trace.len(), &UserAction::swap(0, 1))
            .unwrap_err();
        assert_eq!(err.error_code(), "invalid-step-index");
        assert!(!err.is_penalized());

        let err = engine
            .validate_move(&trace, 0, &UserAction::swap(0, 1))
            .unwrap_err();
        assert_eq!(err.error_code(), "no-action-expected");
    }

    #[test]
    fn wrong_kind_is_reported() {
        let engine = AlgorithmKey::Merge.engine();
        let trace = engine.generate_steps(&[2, 1]);
        let index = trace.next_user_action(0).unwrap();

        let err = engine
            .validate_move(&trace, index, &UserAction::swap(0, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            MoveError::WrongActionType {
                expected: StepKind::Select,
                actual: StepKind::Swap,
                ..
            }
        ));
        assert!(err.is_penalized());
    }

    #[test]
    fn incorrect_move_quotes_rule_and_hint() {
        let engine = AlgorithmKey::Bubble.engine();
        let trace = engine.generate_steps(&[1, 3, 2]);
        let index = trace.next_user_action(0).unwrap();

        let err = engine
            .validate_move(&trace, index, &UserAction::swap(0, 1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Incorrect. In Bubble Sort, swap adjacent elements only when the left one is larger."
        );
        assert_eq!(err.hint(), Some("Swap 3 and 2"));
        assert_eq!(err.context().unwrap().step_index, Some(index));
    }

    #[test]
    fn pair_sharing_one_position_is_incorrect() {
        let engine = AlgorithmKey::Bubble.engine();
        let trace = engine.generate_steps(&[1, 3, 2]);
        let index = trace.next_user_action(0).unwrap();
        assert_eq!(trace.get(index).unwrap().indices, vec![1, 2]);

        for action in [UserAction::swap(0, 1), UserAction::swap(1, 0), UserAction::swap(0, 2)] {
            let err = engine.validate_move(&trace, index, &action).unwrap_err();
            assert_eq!(err.error_code(), "incorrect-move", "{action} accepted");
        }
    }

    #[test]
    fn value_from_the_other_run_is_incorrect() {
        let engine = AlgorithmKey::Merge.engine();
        let trace = engine.generate_steps(&[2, 1]);
        let index = trace.next_user_action(0).unwrap();
        assert_eq!(trace.get(index).unwrap().expected_action(), Some(UserAction::select(1)));

        let err = engine
            .validate_move(&trace, index, &UserAction::select(2))
            .unwrap_err();
        assert_eq!(err.error_code(), "incorrect-move");
    }
}
