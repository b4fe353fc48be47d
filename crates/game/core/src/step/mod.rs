//! Step domain - the recorded events of one sorting run.
//!
//! - `Step`: one atomic event (kind, indices, captured values, snapshot)
//! - `Trace`: the immutable ordered sequence returned by an engine
//! - `TraceBuilder`: per-call scratch space used by the engines
//! - `Playback`: forward-only cursor for demonstration drivers

mod builder;
mod playback;
mod trace;

pub(crate) use builder::TraceBuilder;
pub use playback::{Playback, PlaybackFrame};
pub use trace::Trace;

/// Semantic tag of a recorded step.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum StepKind {
    Compare,
    Swap,
    Select,
    Insert,
    Pivot,
    Divide,
    Merge,
    Sorted,
}

/// A single recorded event.
///
/// `values` are captured when the step is recorded, so they stay meaningful
/// after later steps mutate the array. `snapshot` is the array *after* the
/// step's event took place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub kind: StepKind,
    pub indices: Vec<usize>,
    pub values: Vec<i32>,
    pub snapshot: Vec<i32>,
    pub description: String,
    pub requires_user_action: bool,
}

impl Step {
    /// Applies this step's effect to `array`.
    ///
    /// Swaps exchange their pair, interactive selects (merge placements) and
    /// inserts write their captured values. Every other kind is a marker.
    pub fn apply_to(&self, array: &mut [i32]) {
        match self.kind {
            StepKind::Swap => {
                if let [first, second] = self.indices[..] {
                    array.swap(first, second);
                }
            }
            StepKind::Select if self.requires_user_action => {
                if let (Some(&index), Some(&value)) = (self.indices.first(), self.values.first()) {
                    array[index] = value;
                }
            }
            StepKind::Insert => {
                for (&index, &value) in self.indices.iter().zip(&self.values) {
                    array[index] = value;
                }
            }
            _ => {}
        }
    }

    /// The move a player must submit to satisfy this step, if it is interactive.
    pub fn expected_action(&self) -> Option<UserAction> {
        if !self.requires_user_action {
            return None;
        }
        match (self.kind, &self.indices[..], self.values.first()) {
            (StepKind::Swap, &[first, second], _) => Some(UserAction::swap(first, second)),
            (StepKind::Select, _, Some(&value)) => Some(UserAction::select(value)),
            _ => None,
        }
    }
}

/// A move submitted by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserAction {
    /// Exchange two positions; order of the pair is irrelevant.
    Swap { first: usize, second: usize },
    /// Place a value (merge sort picks by value, not by index).
    Select { value: i32 },
}

impl UserAction {
    pub const fn swap(first: usize, second: usize) -> Self {
        Self::Swap { first, second }
    }

    pub const fn select(value: i32) -> Self {
        Self::Select { value }
    }

    /// The step kind this action answers.
    pub const fn kind(&self) -> StepKind {
        match self {
            Self::Swap { .. } => StepKind::Swap,
            Self::Select { .. } => StepKind::Select,
        }
    }
}

impl core::fmt::Display for UserAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Swap { first, second } => write!(f, "swap {first} {second}"),
            Self::Select { value } => write!(f, "select {value}"),
        }
    }
}

/// Formats values the way step descriptions list runs: `[1, 2, 3]`.
pub(crate) fn format_values(values: &[i32]) -> String {
    let joined = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind, indices: Vec<usize>, values: Vec<i32>, user: bool) -> Step {
        Step {
            kind,
            indices,
            values,
            snapshot: Vec::new(),
            description: String::new(),
            requires_user_action: user,
        }
    }

    #[test]
    fn swap_effect_exchanges_pair() {
        let mut array = vec![5, 3, 8];
        step(StepKind::Swap, vec![0, 1], vec![5, 3], true).apply_to(&mut array);
        assert_eq!(array, vec![3, 5, 8]);
    }

    #[test]
    fn markers_leave_array_untouched() {
        let mut array = vec![5, 3, 8];
        step(StepKind::Select, vec![2], vec![8], false).apply_to(&mut array);
        step(StepKind::Compare, vec![0, 1], vec![5, 3], false).apply_to(&mut array);
        step(StepKind::Sorted, vec![2], vec![8], false).apply_to(&mut array);
        assert_eq!(array, vec![5, 3, 8]);
    }

    #[test]
    fn placement_writes_value() {
        let mut array = vec![38, 27, 43, 10];
        step(StepKind::Select, vec![0], vec![10], true).apply_to(&mut array);
        assert_eq!(array, vec![10, 27, 43, 10]);
    }

    #[test]
    fn expected_action_only_for_interactive_steps() {
        let swap = step(StepKind::Swap, vec![3, 1], vec![4, 2], true);
        assert_eq!(swap.expected_action(), Some(UserAction::swap(3, 1)));

        let place = step(StepKind::Select, vec![0], vec![10], true);
        assert_eq!(place.expected_action(), Some(UserAction::select(10)));

        let marker = step(StepKind::Select, vec![0], vec![10], false);
        assert_eq!(marker.expected_action(), None);
    }

    #[test]
    fn values_are_listed_in_brackets() {
        assert_eq!(format_values(&[38, 27]), "[38, 27]");
        assert_eq!(format_values(&[]), "[]");
    }
}
