use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{Trace, TraceBuilder};

const PSEUDOCODE: &str = "\
quick_sort(a, low, high):
    if low < high:
        p = partition(a, low, high)
        quick_sort(a, low, p - 1)
        quick_sort(a, p + 1, high)

partition(a, low, high):
    pivot = a[high]
    i = low - 1
    for j from low to high - 1:
        if a[j] < pivot:
            i = i + 1
            swap a[i] and a[j]
    swap a[i + 1] and a[high]
    return i + 1";

/// Quick sort with the Lomuto partition scheme (pivot = last element).
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl QuickSort {
    fn sort_range(trace: &mut TraceBuilder, low: usize, high: usize) {
        if low == high {
            trace.sorted(low);
            return;
        }
        if low > high {
            return;
        }

        trace.divide(low, high, format!("Partition positions {low} to {high}"));
        let split = Self::partition(trace, low, high);

        if split > low {
            Self::sort_range(trace, low, split - 1);
        }
        if split < high {
            Self::sort_range(trace, split + 1, high);
        }
    }

    /// Returns the pivot's final position.
    fn partition(trace: &mut TraceBuilder, low: usize, high: usize) -> usize {
        let pivot = trace.value(high);
        trace.pivot(high, format!("Pivot is {pivot}"));

        // Next free slot of the "smaller than pivot" region.
        let mut store = low;
        for j in low..high {
            let value = trace.value(j);
            if value < pivot {
                trace.compare(
                    j,
                    high,
                    format!("Compare {value} and pivot {pivot}: {value} < {pivot}"),
                );
                if store != j {
                    let displaced = trace.value(store);
                    trace.swap(
                        store,
                        j,
                        format!("Swap {displaced} and {value} to move {value} left of the pivot"),
                    );
                } else {
                    trace.select(j, format!("{value} is already left of the pivot"));
                }
                store += 1;
            } else {
                trace.compare(
                    j,
                    high,
                    format!("Compare {value} and pivot {pivot}: {value} >= {pivot}"),
                );
            }
        }

        if store != high {
            let displaced = trace.value(store);
            trace.swap(
                store,
                high,
                format!("Swap pivot {pivot} with {displaced} into position {store}"),
            );
        }
        trace.sorted(store);
        store
    }
}

impl SortAlgorithm for QuickSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Quick
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            best: "O(n log n)",
            average: "O(n log n)",
            worst: "O(n²)",
            space: "O(log n)",
        }
    }

    fn generate_steps(&self, input: &[i32]) -> Trace {
        let mut trace = TraceBuilder::new(input);
        let len = trace.len();
        if len == 0 {
            return trace.finish(self.key());
        }

        Self::sort_range(&mut trace, 0, len - 1);
        trace.sorted_all();
        trace.finish(self.key())
    }

    fn move_rule(&self) -> &'static str {
        "move each element smaller than the pivot into the left partition, then put the pivot right after it"
    }

    fn explanation(&self) -> &'static str {
        "Quick Sort picks the last element of a range as the pivot and partitions the \
         range so that smaller elements come before it and the rest after it. The pivot \
         then sits in its final place and both sides are sorted recursively. Already \
         sorted input is its worst case with this pivot choice."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[3, 1, 2],
            steps: &[
                WalkthroughStep {
                    action: "Pivot is 2",
                    highlight: &[2],
                    array: &[3, 1, 2],
                },
                WalkthroughStep {
                    action: "1 < 2: swap 1 into the left partition",
                    highlight: &[0, 1],
                    array: &[1, 3, 2],
                },
                WalkthroughStep {
                    action: "Swap pivot 2 into position 1",
                    highlight: &[1, 2],
                    array: &[1, 2, 3],
                },
            ],
        }
    }
}
