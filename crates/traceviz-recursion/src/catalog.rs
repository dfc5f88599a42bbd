//! Catalog of the two recursion tracers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use traceviz_step::catalog::{AlgorithmInfo, UnknownAlgorithm};
use traceviz_step::recursion::RecursionStep;

use crate::{fibonacci_trace, hanoi_trace};

/// The available recursive algorithms, keyed by their registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecursionKind {
    Fibonacci,
    Hanoi,
}

impl RecursionKind {
    pub const ALL: [RecursionKind; 2] = [RecursionKind::Fibonacci, RecursionKind::Hanoi];

    pub fn key(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Hanoi => "hanoi",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Fibonacci => AlgorithmInfo {
                name: "Fibonacci Sequence",
                time_complexity: "O(2^n)",
                space_complexity: "O(n)",
                summary: "Calculates the nth Fibonacci number recursively. Each call branches \
                          into two recursive calls, forming a binary call tree.",
            },
            Self::Hanoi => AlgorithmInfo {
                name: "Tower of Hanoi",
                time_complexity: "O(2^n)",
                space_complexity: "O(n)",
                summary: "Moves all disks from the first tower to the last, one disk at a \
                          time, never placing a larger disk on a smaller one.",
            },
        }
    }
}

impl FromStr for RecursionKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownAlgorithm::new(s))
    }
}

/// Run the selected recursion tracer for input `n`.
pub fn execute(kind: RecursionKind, n: u32) -> Vec<RecursionStep> {
    match kind {
        RecursionKind::Fibonacci => fibonacci_trace(n),
        RecursionKind::Hanoi => hanoi_trace(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_parses_from_its_key() {
        for kind in RecursionKind::ALL {
            assert_eq!(kind.key().parse::<RecursionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "ackermann".parse::<RecursionKind>().unwrap_err();
        assert!(err.to_string().contains("ackermann"));
    }
}
