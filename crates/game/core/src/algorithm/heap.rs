use super::{AlgorithmKey, Complexity, SortAlgorithm, Walkthrough, WalkthroughStep};
use crate::step::{Trace, TraceBuilder};

const PSEUDOCODE: &str = "\
heap_sort(a):
    for i from n / 2 - 1 down to 0:
        heapify(a, n, i)
    for end from n - 1 down to 1:
        swap a[0] and a[end]
        heapify(a, end, 0)

heapify(a, size, i):
    largest = i
    if 2i + 1 < size and a[2i + 1] > a[largest]: largest = 2i + 1
    if 2i + 2 < size and a[2i + 2] > a[largest]: largest = 2i + 2
    if largest != i:
        swap a[i] and a[largest]
        heapify(a, size, largest)";

/// In-place heap sort over a max-heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSort;

impl HeapSort {
    /// Sift-down of `root` within the first `size` elements.
    fn heapify(trace: &mut TraceBuilder, size: usize, root: usize) {
        let mut largest = root;

        for child in [2 * root + 1, 2 * root + 2] {
            if child >= size {
                break;
            }
            let (current, candidate) = (trace.value(largest), trace.value(child));
            if candidate > current {
                trace.compare(
                    largest,
                    child,
                    format!("Compare {current} and child {candidate}: {candidate} > {current}"),
                );
                largest = child;
            } else {
                trace.compare(
                    largest,
                    child,
                    format!("Compare {current} and child {candidate}: {candidate} <= {current}"),
                );
            }
        }

        if largest != root {
            let (parent, child) = (trace.value(root), trace.value(largest));
            trace.swap(
                root,
                largest,
                format!("Swap {parent} and {child} to restore the heap"),
            );
            Self::heapify(trace, size, largest);
        }
    }
}

impl SortAlgorithm for HeapSort {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Heap
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            best: "O(n log n)",
            average: "O(n log n)",
            worst: "O(n log n)",
            space: "O(1)",
        }
    }

    fn generate_steps(&self, input: &[i32]) -> Trace {
        let mut trace = TraceBuilder::new(input);
        let len = trace.len();
        if len == 0 {
            return trace.finish(self.key());
        }
        if len == 1 {
            trace.sorted(0);
            return trace.finish(self.key());
        }

        trace.divide(0, len - 1, "Build a max heap".to_string());
        for root in (0..len / 2).rev() {
            Self::heapify(&mut trace, len, root);
        }

        for end in (1..len).rev() {
            let (max, last) = (trace.value(0), trace.value(end));
            trace.swap(
                0,
                end,
                format!("Swap max {max} with {last} at position {end}"),
            );
            trace.sorted(end);
            Self::heapify(&mut trace, end, 0);
        }

        trace.sorted(0);
        trace.finish(self.key())
    }

    fn move_rule(&self) -> &'static str {
        "swap a parent with its larger child, or the root with the last unsorted element"
    }

    fn explanation(&self) -> &'static str {
        "Heap Sort first arranges the array into a max-heap, where every parent is at \
         least as large as its children, so the maximum sits at the root. It then \
         swaps the root with the last unsorted element, shrinks the heap by one and \
         sifts the new root down until the heap property holds again."
    }

    fn pseudocode(&self) -> &'static str {
        PSEUDOCODE
    }

    fn example_walkthrough(&self) -> Walkthrough {
        Walkthrough {
            array: &[3, 1, 2],
            steps: &[
                WalkthroughStep {
                    action: "Build max heap: 3 is larger than both children, already a heap",
                    highlight: &[0, 1, 2],
                    array: &[3, 1, 2],
                },
                WalkthroughStep {
                    action: "Swap max 3 with the last unsorted element",
                    highlight: &[0, 2],
                    array: &[2, 1, 3],
                },
                WalkthroughStep {
                    action: "Swap max 2 with the last unsorted element",
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
    fn heap_construction_is_announced_once() {
        let trace = HeapSort.generate_steps(&[4, 10, 3, 5, 1]);
        assert_eq!(trace.count_kind(StepKind::Divide), 1);
        assert_eq!(trace.get(0).unwrap().kind, StepKind::Divide);
        assert_eq!(trace.get(0).unwrap().indices, vec![0, 4]);
        assert_eq!(trace.final_array(), &[1, 3, 4, 5, 10]);
    }

    #[test]
    fn sift_down_swaps_with_larger_child() {
        // root 1 has children 3 and 2: compare both, then swap with 3
        let trace = HeapSort.generate_steps(&[1, 3, 2]);
        let kinds: Vec<StepKind> = trace.iter().take(4).map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Divide,
                StepKind::Compare,
                StepKind::Compare,
                StepKind::Swap,
            ]
        );
        assert_eq!(
            trace.get(3).unwrap().expected_action(),
            Some(UserAction::swap(0, 1))
        );
    }

    #[test]
    fn root_is_marked_last() {
        let trace = HeapSort.generate_steps(&[2, 1]);
        let last = trace.steps().last().unwrap();
        assert_eq!(last.kind, StepKind::Sorted);
        assert_eq!(last.indices, vec![0]);
    }
}
