use sha2::{Digest, Sha256};

use super::{Step, StepKind};

/// The ordered steps produced by one `generate_steps` call.
///
/// A trace owns its input and its steps and exposes no mutation; replaying it
/// never alters it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    input: Vec<i32>,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(input: Vec<i32>, steps: Vec<Step>) -> Self {
        Self { input, steps }
    }

    /// The array the trace was generated from.
    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Step> + ExactSizeIterator {
        self.steps.iter()
    }

    /// Number of swap steps, the par a player is measured against.
    pub fn optimal_swap_count(&self) -> usize {
        self.count_kind(StepKind::Swap)
    }

    pub fn user_action_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.requires_user_action)
            .count()
    }

    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// Index of the first interactive step at or after `from`.
    pub fn next_user_action(&self, from: usize) -> Option<usize> {
        self.steps
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, step)| step.requires_user_action)
            .map(|(index, _)| index)
    }

    /// Array state after the last step (the input when the trace is empty).
    pub fn final_array(&self) -> &[i32] {
        self.steps
            .last()
            .map(|step| step.snapshot.as_slice())
            .unwrap_or(&self.input)
    }

    /// Applies every step's effect, in order, to a copy of the input.
    pub fn replay(&self) -> Vec<i32> {
        let mut array = self.input.clone();
        for step in &self.steps {
            step.apply_to(&mut array);
        }
        array
    }

    /// SHA-256 commitment over every step's kind, indices, values,
    /// description and interaction flag, in order.
    ///
    /// Snapshots are derived data and are not hashed.
    pub fn root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.input.len() as u64).to_le_bytes());
        for value in &self.input {
            hasher.update(value.to_le_bytes());
        }
        for step in &self.steps {
            hasher.update([step.kind as u8, u8::from(step.requires_user_action)]);
            hasher.update((step.indices.len() as u64).to_le_bytes());
            for index in &step.indices {
                hasher.update((*index as u64).to_le_bytes());
            }
            for value in &step.values {
                hasher.update(value.to_le_bytes());
            }
            hasher.update((step.description.len() as u64).to_le_bytes());
            hasher.update(step.description.as_bytes());
        }
        hasher.finalize().into()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = core::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
