use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{Trace, TraceBuilder};

const PSEUDOCODE: &str = "\
for i from 0 to n - 2:
    min = i
    for j from i + 1 to n - 1:
        if a[j] < a[min]:
            min = j
    if min != i:
        swap a[i] and a[min]";

/// Repeatedly selects the minimum of the unsorted suffix.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Selection
    }

    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            best: "O(n²)",
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

        for i in 0..len - 1 {
            trace.select(
                i,
                format!("Scan for the minimum starting at position {i}"),
            );
            let mut min = i;

            for j in i + 1..len {
                let (current, candidate) = (trace.value(min), trace.value(j));
                if candidate < current {
                    trace.compare(
                        min,
                        j,
                        format!("Compare {current} and {candidate}: {candidate} < {current}"),
                    );
                    min = j;
                    trace.select(j, format!("New minimum {candidate} at position {j}"));
                } else {
                    trace.compare(
                        min,
                        j,
                        format!("Compare {current} and {candidate}: {candidate} >= {current}"),
                    );
                }
            }

            if min != i {
                let (first, minimum) = (trace.value(i), trace.value(min));
                trace.swap(
                    i,
                    min,
                    format!("Swap {first} and {minimum} to place the minimum at position {i}"),
                );
            }
            trace.sorted(i);
        }

        trace.sorted(len - 1);
        trace.finish(self.key())
    }

    fn move_rule(&self) -> &'static str {
        "swap the smallest unsorted element into the first unsorted position"
    }

    fn explanation(&self) -> &'static str {
        "Selection Sort grows a sorted prefix one element at a time. Each round scans \
         the unsorted part for its minimum and swaps it into the first unsorted \
         position. It never makes more than n - 1 swaps, but always performs every \
         comparison."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[3, 1, 2],
            steps: &[
                WalkthroughStep {
                    action: "Minimum of [3, 1, 2] is 1: swap it into position 0",
                    highlight: &[0, 1],
                    array: &[1, 3, 2],
                },
                WalkthroughStep {
                    action: "Minimum of [3, 2] is 2: swap it into position 1",
                    highlight: &[1, 2],
                    array: &[1, 2, 3],
                },
                WalkthroughStep {
                    action: "Only 3 is left, it is already in place",
                    highlight: &[2],
                    array: &[1, 2, 3],
                },
            ],
        }
    }
}
