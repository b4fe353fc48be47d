use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{Trace, TraceBuilder};

const PSEUDOCODE: &str = "\
for pass from 0 to n - 2:
    swapped = false
    for j from 0 to n - 2 - pass:
        if a[j] > a[j + 1]:
            swap a[j] and a[j + 1]
            swapped = true
    if not swapped:
        stop";

/// Adjacent-exchange sort with early exit on a pass without swaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Bubble
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            best: "O(n)",
            average: "O(n²)",
            worst: "O(n²)",
            space: "O(1)",
        }
    }

    fn generate_steps(&self, input: &[i32]) -> Trace {
        let mut trace = TraceBuilder::new(input);
        let len = trace.len();
        if len == 0 {
            return trace.finish(self.key());
        }

        for pass in 0..len - 1 {
            let end = len - 1 - pass;
            let mut swapped = false;

            for j in 0..end {
                let (left, right) = (trace.value(j), trace.value(j + 1));
                if left > right {
                    trace.compare(
                        j,
                        j + 1,
                        format!("Compare {left} and {right}: {left} > {right}, swap needed"),
                    );
                    trace.swap(j, j + 1, format!("Swap {left} and {right}"));
                    swapped = true;
                } else {
                    trace.compare(
                        j,
                        j + 1,
                        format!("Compare {left} and {right}: {left} <= {right}, no swap"),
                    );
                }
            }

            trace.sorted(end);

            if !swapped {
                // No exchange means everything left of `end` is already in order.
                for index in (0..end).rev() {
                    trace.sorted(index);
                }
                return trace.finish(self.key());
            }
        }

        trace.sorted(0);
        trace.finish(self.key())
    }

    fn move_rule(&self) -> &'static str {
        "swap adjacent elements only when the left one is larger"
    }

    fn explanation(&self) -> &'static str {
        "Bubble Sort walks the array repeatedly, comparing each pair of neighbours \
         and swapping them when they are out of order. After every pass the largest \
         unsorted value has bubbled up to its final place at the end. A pass without \
         any swap proves the array is sorted and ends the algorithm early."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[3, 1, 2],
            steps: &[
                WalkthroughStep {
                    action: "Compare 3 and 1: 3 > 1, swap them",
                    highlight: &[0, 1],
                    array: &[1, 3, 2],
                },
                WalkthroughStep {
                    action: "Compare 3 and 2: 3 > 2, swap them",
                    highlight: &[1, 2],
                    array: &[1, 2, 3],
                },
                WalkthroughStep {
                    action: "3 has reached its final position",
                    highlight: &[2],
                    array: &[1, 2, 3],
                },
                WalkthroughStep {
                    action: "Compare 1 and 2: 1 <= 2, no swap in this pass, done",
                    highlight: &[0, 1],
                    array: &[1, 2, 3],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{StepKind, UserAction};

    #[test]
    fn first_steps_compare_then_swap_front_pair() {
        let trace = BubbleSort.generate_steps(&[5, 3, 8, 4, 2]);

        let first = trace.get(0).unwrap();
        assert_eq!(first.kind, StepKind::Compare);
        assert_eq!(first.indices, vec![0, 1]);
        assert_eq!(first.values, vec![5, 3]);
        assert_eq!(first.description, "Compare 5 and 3: 5 > 3, swap needed");

        let swap_index = trace.next_user_action(0).unwrap();
        let swap = trace.get(swap_index).unwrap();
        assert_eq!(swap.kind, StepKind::Swap);
        assert_eq!(swap.expected_action(), Some(UserAction::swap(0, 1)));
        assert_eq!(swap.snapshot, vec![3, 5, 8, 4, 2]);

        assert_eq!(trace.final_array(), &[2, 3, 4, 5, 8]);
    }

    #[test]
    fn every_position_is_marked_sorted() {
        let trace = BubbleSort.generate_steps(&[5, 3, 8, 4, 2]);
        let mut marked: Vec<usize> = trace
            .iter()
            .filter(|step| step.kind == StepKind::Sorted)
            .map(|step| step.indices[0])
            .collect();
        marked.sort();
        assert_eq!(marked, vec![0, 1, 2, 3, 4]);
        assert_eq!(trace.steps().last().unwrap().kind, StepKind::Sorted);
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let trace = BubbleSort.generate_steps(&[1, 2, 3, 4]);
        assert_eq!(trace.count_kind(StepKind::Compare), 3);
        assert_eq!(trace.count_kind(StepKind::Sorted), 4);
        assert_eq!(trace.optimal_swap_count(), 0);
        let order: Vec<usize> = trace
            .iter()
            .filter(|step| step.kind == StepKind::Sorted)
            .map(|step| step.indices[0])
            .collect();
        assert_eq!(order, vec![3, 2, 1, 0]);
    }

    #[test]
    fn no_swap_description_uses_less_or_equal() {
        let trace = BubbleSort.generate_steps(&[3, 3]);
        assert_eq!(
            trace.get(0).unwrap().description,
            "Compare 3 and 3: 3 <= 3, no swap"
        );
    }
}
