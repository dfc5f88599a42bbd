//! Catalog of the four search tracers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use traceviz_step::catalog::{AlgorithmInfo, UnknownAlgorithm};
use traceviz_step::search::SearchStep;

use crate::{binary_trace, exponential_trace, jump_trace, linear_trace};

/// The available search algorithms, keyed by their registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Linear,
    Binary,
    Jump,
    Exponential,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Linear,
        SearchKind::Binary,
        SearchKind::Jump,
        SearchKind::Exponential,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::Jump => "jump",
            Self::Exponential => "exponential",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Linear => AlgorithmInfo {
                name: "Linear Search",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                summary: "Checks each element sequentially until the target is found or the \
                          array is exhausted.",
            },
            Self::Binary => AlgorithmInfo {
                name: "Binary Search",
                time_complexity: "O(log n)",
                space_complexity: "O(1)",
                summary: "Works only on sorted arrays by repeatedly dividing the search space \
                          in half.",
            },
            Self::Jump => AlgorithmInfo {
                name: "Jump Search",
                time_complexity: "O(√n)",
                space_complexity: "O(1)",
                summary: "Jumps through the array in fixed steps, then performs linear search \
                          in the identified block.",
            },
            Self::Exponential => AlgorithmInfo {
                name: "Exponential Search",
                time_complexity: "O(log n)",
                space_complexity: "O(1)",
                summary: "Finds a range where the element might be present, then performs \
                          binary search within it.",
            },
        }
    }
}

impl FromStr for SearchKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownAlgorithm::new(s))
    }
}

/// Run the selected search tracer over `sequence`.
pub fn execute(kind: SearchKind, sequence: &[i64], target: i64) -> Vec<SearchStep> {
    match kind {
        SearchKind::Linear => linear_trace(sequence, target),
        SearchKind::Binary => binary_trace(sequence, target),
        SearchKind::Jump => jump_trace(sequence, target),
        SearchKind::Exponential => exponential_trace(sequence, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_parses_from_its_key() {
        for kind in SearchKind::ALL {
            assert_eq!(kind.key().parse::<SearchKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "ternary".parse::<SearchKind>().unwrap_err();
        assert!(err.to_string().contains("ternary"));
    }
}
