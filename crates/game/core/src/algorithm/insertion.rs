use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{Trace, TraceBuilder};

const PSEUDOCODE: &str = "\
for i from 1 to n - 1:
    key = a[i]
    j = i
    while j > 0 and a[j - 1] > key:
        a[j] = a[j - 1]
        j = j - 1
    a[j] = key";

/// Grows a sorted prefix by shifting each key left into place.
///
/// Each right-shift of a larger predecessor is recorded as an adjacent swap
/// with the key, so the swap steps alone sort the array.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Insertion
    }

    fn name(&self) -> &'static str {
        "Insertion Sort"
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

        trace.sorted(0);

        for i in 1..len {
            let key = trace.value(i);
            trace.select(i, format!("Insert {key} into the sorted part"));

            let mut j = i;
            while j > 0 {
                let previous = trace.value(j - 1);
                if previous > key {
                    trace.compare(
                        j - 1,
                        j,
                        format!("Compare {previous} and {key}: {previous} > {key}, shift right"),
                    );
                    trace.swap(j - 1, j, format!("Shift {previous} right"));
                    j -= 1;
                } else {
                    trace.compare(
                        j - 1,
                        j,
                        format!("Compare {previous} and {key}: {previous} <= {key}, no shift"),
                    );
                    break;
                }
            }

            trace.insert(j, i, format!("Insert {key} at position {j}"));
        }

        trace.sorted_all();
        trace.finish(self.key())
    }

    fn move_rule(&self) -> &'static str {
        "shift the key left past every larger element of the sorted part"
    }

    fn explanation(&self) -> &'static str {
        "Insertion Sort keeps the left part of the array sorted. It takes the next \
         element as a key and shifts every larger element of the sorted part one \
         step right until the key's place opens up. Nearly sorted input needs very \
         few shifts, which makes it fast in practice on small or almost ordered data."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[3, 1, 2],
            steps: &[
                WalkthroughStep {
                    action: "Insert 1: 3 > 1, shift 3 right",
                    highlight: &[0, 1],
                    array: &[1, 3, 2],
                },
                WalkthroughStep {
                    action: "Insert 2: 3 > 2, shift 3 right",
                    highlight: &[1, 2],
                    array: &[1, 2, 3],
                },
                WalkthroughStep {
                    action: "1 <= 2, insert 2 at position 1",
                    highlight: &[0, 1],
                    array: &[1, 2, 3],
                },
            ],
        }
    }
}
