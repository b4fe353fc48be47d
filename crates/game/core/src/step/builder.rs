//! Scratch buffer the engines record into.

use super::{Step, StepKind, Trace};
use crate::algorithm::AlgorithmKey;

/// Working copy of the array plus the steps recorded so far.
///
/// Every `generate_steps` call creates its own builder and consumes it with
/// [`TraceBuilder::finish`], so no step buffer outlives a single run.
pub(crate) struct TraceBuilder {
    input: Vec<i32>,
    array: Vec<i32>,
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub(crate) fn new(input: &[i32]) -> Self {
        Self {
            input: input.to_vec(),
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn value(&self, index: usize) -> i32 {
        self.array[index]
    }

    pub(crate) fn slice(&self, start: usize, end_inclusive: usize) -> &[i32] {
        &self.array[start..=end_inclusive]
    }

    fn push(
        &mut self,
        kind: StepKind,
        indices: Vec<usize>,
        values: Vec<i32>,
        description: String,
        requires_user_action: bool,
    ) {
        debug_assert_eq!(indices.len(), values.len());
        self.steps.push(Step {
            kind,
            indices,
            values,
            snapshot: self.array.clone(),
            description,
            requires_user_action,
        });
    }

    /// Records a comparison of two positions.
    pub(crate) fn compare(&mut self, first: usize, second: usize, description: String) {
        let values = vec![self.array[first], self.array[second]];
        self.push(StepKind::Compare, vec![first, second], values, description, false);
    }

    /// Records a comparison whose operands are no longer both in the array.
    pub(crate) fn compare_values(
        &mut self,
        indices: [usize; 2],
        values: [i32; 2],
        description: String,
    ) {
        self.push(
            StepKind::Compare,
            indices.to_vec(),
            values.to_vec(),
            description,
            false,
        );
    }

    /// Exchanges two positions. The step keeps the pre-swap values and the
    /// post-swap snapshot.
    pub(crate) fn swap(&mut self, first: usize, second: usize, description: String) {
        let values = vec![self.array[first], self.array[second]];
        self.array.swap(first, second);
        self.push(StepKind::Swap, vec![first, second], values, description, true);
    }

    /// Non-interactive highlight of one position.
    pub(crate) fn select(&mut self, index: usize, description: String) {
        let values = vec![self.array[index]];
        self.push(StepKind::Select, vec![index], values, description, false);
    }

    /// Interactive placement of `value` at `index` (merge sort).
    pub(crate) fn place(&mut self, index: usize, value: i32, description: String) {
        self.array[index] = value;
        self.push(StepKind::Select, vec![index], vec![value], description, true);
    }

    /// Marks the key's final resting place; `indices` spans the positions
    /// the key travelled across, leftmost first.
    pub(crate) fn insert(&mut self, start: usize, end_inclusive: usize, description: String) {
        let indices: Vec<usize> = (start..=end_inclusive).collect();
        let values = indices.iter().map(|&index| self.array[index]).collect();
        self.push(StepKind::Insert, indices, values, description, false);
    }

    pub(crate) fn pivot(&mut self, index: usize, description: String) {
        let values = vec![self.array[index]];
        self.push(StepKind::Pivot, vec![index], values, description, false);
    }

    pub(crate) fn divide(&mut self, low: usize, high: usize, description: String) {
        let values = vec![self.array[low], self.array[high]];
        self.push(StepKind::Divide, vec![low, high], values, description, false);
    }

    pub(crate) fn merge(&mut self, low: usize, high: usize, description: String) {
        let values = vec![self.array[low], self.array[high]];
        self.push(StepKind::Merge, vec![low, high], values, description, false);
    }

    pub(crate) fn sorted(&mut self, index: usize) {
        let values = vec![self.array[index]];
        self.push(
            StepKind::Sorted,
            vec![index],
            values,
            format!("Position {index} is sorted"),
            false,
        );
    }

    /// Marks every position sorted, left to right.
    pub(crate) fn sorted_all(&mut self) {
        for index in 0..self.array.len() {
            self.sorted(index);
        }
    }

    pub(crate) fn finish(self, algorithm: AlgorithmKey) -> Trace {
        debug_assert!(self.array.windows(2).all(|pair| pair[0] <= pair[1]));
        tracing::debug!(
            %algorithm,
            len = self.input.len(),
            steps = self.steps.len(),
            "generated trace"
        );
        Trace::new(self.input, self.steps)
    }
}
