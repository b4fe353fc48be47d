//! Algorithm domain - the six instrumented sorting engines.
//!
//! Every engine is a stateless unit type implementing [`SortAlgorithm`].
//! `generate_steps` records into a private builder and hands back an owned
//! [`Trace`]; validation is a pure function of that trace.
//!
//! # Module Structure
//!
//! - `validation`: move validation shared by all engines ([`MoveError`])
//! - `bubble`, `selection`, `insertion`, `merge`, `quick`, `heap`: engines

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod validation;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use validation::MoveError;

use crate::step::{StepKind, Trace, UserAction};

/// Fixed set of algorithms offered by the quiz.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AlgorithmKey {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl AlgorithmKey {
    /// The engine implementing this algorithm.
    pub fn engine(self) -> &'static dyn SortAlgorithm {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Selection => &SelectionSort,
            Self::Insertion => &InsertionSort,
            Self::Merge => &MergeSort,
            Self::Quick => &QuickSort,
            Self::Heap => &HeapSort,
        }
    }
}

/// Declared complexity labels. Descriptive only, never computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// One narrated move of a canonical example.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WalkthroughStep {
    pub action: &'static str,
    pub highlight: &'static [usize],
    /// Array after the move.
    pub array: &'static [i32],
}

/// Canonical worked example shown next to the explanation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Walkthrough {
    pub array: &'static [i32],
    pub steps: &'static [WalkthroughStep],
}

/// Shared contract of the sorting engines.
pub trait SortAlgorithm: Send + Sync {
    fn key(&self) -> AlgorithmKey;

    /// Display name, e.g. "Bubble Sort".
    fn name(&self) -> &'static str;

    fn complexity(&self) -> Complexity;

    /// Runs the algorithm on a copy of `input` and records every step.
    ///
    /// Deterministic; `input` is never mutated and the returned trace shares
    /// nothing with previous calls.
    fn generate_steps(&self, input: &[i32]) -> Trace;

    /// Rule quoted back to the player after a wrong move.
    fn move_rule(&self) -> &'static str;

    /// Kind of action interactive steps expect.
    fn action_kind(&self) -> StepKind {
        StepKind::Swap
    }

    /// Checks `action` against the interactive step at `step_index`.
    fn validate_move(
        &self,
        trace: &Trace,
        step_index: usize,
        action: &UserAction,
    ) -> Result<(), MoveError> {
        validation::validate_move(self.name(), self.move_rule(), trace, step_index, action)
    }

    fn explanation(&self) -> &'static str;

    fn pseudocode(&self) -> &'static str;

    fn example_walkthrough(&self) -> Walkthrough;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_key_maps_to_its_engine() {
        for key in AlgorithmKey::iter() {
            assert_eq!(key.engine().key(), key);
        }
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!(AlgorithmKey::from_str("Quick").unwrap(), AlgorithmKey::Quick);
        assert_eq!(AlgorithmKey::from_str("heap").unwrap(), AlgorithmKey::Heap);
        assert!(AlgorithmKey::from_str("bogo").is_err());
    }

    #[test]
    fn only_merge_expects_select() {
        for key in AlgorithmKey::iter() {
            let expected = if key == AlgorithmKey::Merge {
                StepKind::Select
            } else {
                StepKind::Swap
            };
            assert_eq!(key.engine().action_kind(), expected);
        }
    }

    #[test]
    fn walkthroughs_end_sorted() {
        for key in AlgorithmKey::iter() {
            let walkthrough = key.engine().example_walkthrough();
            let mut expected = walkthrough.array.to_vec();
            expected.sort();

            let last = walkthrough.steps.last().expect("walkthrough has steps");
            assert_eq!(last.array, expected.as_slice(), "{key}");
            for step in walkthrough.steps {
                assert_eq!(step.array.len(), walkthrough.array.len(), "{key}");
                assert!(step.highlight.iter().all(|&i| i < step.array.len()));
            }
        }
    }

    #[test]
    fn descriptive_content_is_present() {
        for key in AlgorithmKey::iter() {
            let engine = key.engine();
            assert!(engine.name().ends_with("Sort"));
            assert!(!engine.explanation().is_empty());
            assert!(engine.pseudocode().lines().count() > 2);
            assert!(engine.complexity().worst.starts_with("O("));
        }
    }
}
