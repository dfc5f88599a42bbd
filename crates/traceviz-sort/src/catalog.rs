//! Catalog of the nine sorting tracers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use traceviz_step::catalog::{AlgorithmInfo, UnknownAlgorithm};
use traceviz_step::sort::SortStep;

use crate::{
    bubble_trace, bucket_trace, counting_trace, heap_trace, insertion_trace, merge_trace,
    quick_trace, radix_trace, selection_trace,
};

/// The available sorting algorithms, keyed by their registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Counting,
    Radix,
    Bucket,
}

impl SortKind {
    pub const ALL: [SortKind; 9] = [
        SortKind::Bubble,
        SortKind::Selection,
        SortKind::Insertion,
        SortKind::Quick,
        SortKind::Merge,
        SortKind::Heap,
        SortKind::Counting,
        SortKind::Radix,
        SortKind::Bucket,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "Repeatedly steps through the list, compares adjacent elements and \
                          swaps them if they are in the wrong order.",
            },
            Self::Selection => AlgorithmInfo {
                name: "Selection Sort",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "Finds the minimum element and places it at the beginning, then \
                          repeats for the remaining unsorted portion.",
            },
            Self::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "Builds the final sorted array one item at a time by inserting each \
                          element into its correct position.",
            },
            Self::Quick => AlgorithmInfo {
                name: "Quick Sort",
                time_complexity: "O(n log n)",
                space_complexity: "O(log n)",
                summary: "Divide-and-conquer around a pivot element, partitioning the array \
                          and recursing into both sides.",
            },
            Self::Merge => AlgorithmInfo {
                name: "Merge Sort",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
                summary: "Divides the array into halves, sorts them separately, then merges \
                          the sorted halves.",
            },
            Self::Heap => AlgorithmInfo {
                name: "Heap Sort",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
                summary: "Builds a max heap from the array and repeatedly extracts the \
                          maximum element.",
            },
            Self::Counting => AlgorithmInfo {
                name: "Counting Sort",
                time_complexity: "O(n + k)",
                space_complexity: "O(k)",
                summary: "Counts the occurrences of each value and uses the counts to place \
                          elements in sorted order.",
            },
            Self::Radix => AlgorithmInfo {
                name: "Radix Sort",
                time_complexity: "O(d × n)",
                space_complexity: "O(n + k)",
                summary: "Processes digits from least significant to most significant, using \
                          a counting pass for each digit.",
            },
            Self::Bucket => AlgorithmInfo {
                name: "Bucket Sort",
                time_complexity: "O(n + k)",
                space_complexity: "O(n × k)",
                summary: "Distributes elements into buckets, sorts individual buckets, and \
                          concatenates them.",
            },
        }
    }
}

impl FromStr for SortKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownAlgorithm::new(s))
    }
}

/// Run the selected sorting tracer over `input`. The caller's sequence is
/// never mutated.
pub fn execute(kind: SortKind, input: &[i64]) -> Vec<SortStep> {
    match kind {
        SortKind::Bubble => bubble_trace(input),
        SortKind::Selection => selection_trace(input),
        SortKind::Insertion => insertion_trace(input),
        SortKind::Quick => quick_trace(input),
        SortKind::Merge => merge_trace(input),
        SortKind::Heap => heap_trace(input),
        SortKind::Counting => counting_trace(input),
        SortKind::Radix => radix_trace(input),
        SortKind::Bucket => bucket_trace(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_parses_from_its_key() {
        for kind in SortKind::ALL {
            assert_eq!(kind.key().parse::<SortKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "bogo".parse::<SortKind>().unwrap_err();
        assert!(err.to_string().contains("bogo"));
    }

    #[test]
    fn test_info_is_populated() {
        for kind in SortKind::ALL {
            let info = kind.info();
            assert!(!info.name.is_empty());
            assert!(!info.time_complexity.is_empty());
        }
    }
}
