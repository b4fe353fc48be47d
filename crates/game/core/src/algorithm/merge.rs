use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{StepKind, Trace, TraceBuilder, format_values};

const PSEUDOCODE: &str = "\
merge_sort(a, low, high):
    if low < high:
        mid = (low + high) / 2
        merge_sort(a, low, mid)
        merge_sort(a, mid + 1, high)
        merge(a, low, mid, high)

merge(a, low, mid, high):
    left = a[low..mid], right = a[mid + 1..high]
    k = low
    while left and right are not empty:
        if left[0] <= right[0]: a[k] = take(left)
        else: a[k] = take(right)
        k = k + 1
    copy what remains of left, then of right";

/// Top-down merge sort. Players place merged values by value, not by index.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl MergeSort {
    fn sort_range(trace: &mut TraceBuilder, low: usize, high: usize) {
        if low >= high {
            return;
        }
        let mid = low + (high - low) / 2;
        let description = format!(
            "Divide {} into {} and {}",
            format_values(trace.slice(low, high)),
            format_values(trace.slice(low, mid)),
            format_values(trace.slice(mid + 1, high)),
        );
        trace.divide(low, high, description);

        Self::sort_range(trace, low, mid);
        Self::sort_range(trace, mid + 1, high);
        Self::merge(trace, low, mid, high);
    }

    fn merge(trace: &mut TraceBuilder, low: usize, mid: usize, high: usize) {
        let left = trace.slice(low, mid).to_vec();
        let right = trace.slice(mid + 1, high).to_vec();
        trace.merge(
            low,
            high,
            format!(
                "Merge {} and {}",
                format_values(&left),
                format_values(&right)
            ),
        );

        let (mut i, mut j, mut k) = (0, 0, low);
        while i < left.len() && j < right.len() {
            let (l, r) = (left[i], right[j]);
            if l <= r {
                trace.compare_values(
                    [low + i, mid + 1 + j],
                    [l, r],
                    format!("Compare {l} and {r}: {l} <= {r}, take {l}"),
                );
                trace.place(k, l, format!("Place {l} at position {k}"));
                i += 1;
            } else {
                trace.compare_values(
                    [low + i, mid + 1 + j],
                    [l, r],
                    format!("Compare {l} and {r}: {l} > {r}, take {r}"),
                );
                trace.place(k, r, format!("Place {r} at position {k}"));
                j += 1;
            }
            k += 1;
        }

        for &value in left[i..].iter().chain(&right[j..]) {
            trace.place(k, value, format!("Place remaining {value} at position {k}"));
            k += 1;
        }
    }
}

impl SortAlgorithm for MergeSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Merge
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            best: "O(n log n)",
            average: "O(n log n)",
            worst: "O(n log n)",
            space: "O(n)",
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
        "place the smaller front element of the two runs, taking the left one on ties"
    }

    fn action_kind(&self) -> StepKind {
        StepKind::Select
    }

    fn explanation(&self) -> &'static str {
        "Merge Sort splits the array in half, sorts each half recursively and then \
         merges the two sorted runs by repeatedly taking the smaller front element. \
         Taking the left element on ties keeps equal values in their original order, \
         so the sort is stable. It always runs in O(n log n) but needs a buffer."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[38, 27, 43, 10],
            steps: &[
                WalkthroughStep {
                    action: "Divide [38, 27, 43, 10] into [38, 27] and [43, 10]",
                    highlight: &[0, 3],
                    array: &[38, 27, 43, 10],
                },
                WalkthroughStep {
                    action: "Merge [38] and [27] into [27, 38]",
                    highlight: &[0, 1],
                    array: &[27, 38, 43, 10],
                },
                WalkthroughStep {
                    action: "Merge [43] and [10] into [10, 43]",
                    highlight: &[2, 3],
                    array: &[27, 38, 10, 43],
                },
                WalkthroughStep {
                    action: "Merge [27, 38] and [10, 43] into [10, 27, 38, 43]",
                    highlight: &[0, 1, 2, 3],
                    array: &[10, 27, 38, 43],
                },
            ],
        }
    }
}
