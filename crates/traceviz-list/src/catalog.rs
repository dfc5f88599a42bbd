//! Catalog of the three linked-list variants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use traceviz_step::catalog::{AlgorithmInfo, UnknownAlgorithm};
use traceviz_step::list::{ListNode, ListOperation, ListStep};

use crate::{circular_trace, doubly_trace, singly_trace};

/// The available list variants, keyed by their registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Singly,
    Doubly,
    Circular,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Singly, ListKind::Doubly, ListKind::Circular];

    pub fn key(self) -> &'static str {
        match self {
            Self::Singly => "singly",
            Self::Doubly => "doubly",
            Self::Circular => "circular",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Singly => AlgorithmInfo {
                name: "Singly Linked List",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                summary: "A linear structure where each node holds a value and a reference to \
                          the next node.",
            },
            Self::Doubly => AlgorithmInfo {
                name: "Doubly Linked List",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                summary: "A linear structure where each node references both its next and \
                          previous neighbors.",
            },
            Self::Circular => AlgorithmInfo {
                name: "Circular Linked List",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                summary: "A linked list whose last node points back to the first, forming a \
                          circle.",
            },
        }
    }
}

impl FromStr for ListKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownAlgorithm::new(s))
    }
}

/// Run `operation` with `value` over the selected list variant. `position`
/// only applies to inserts and defaults to the head.
pub fn execute(
    kind: ListKind,
    initial: &[ListNode],
    operation: ListOperation,
    value: i64,
    position: Option<usize>,
) -> Vec<ListStep> {
    let position = position.unwrap_or(0);
    match kind {
        ListKind::Singly => singly_trace(initial, operation, value, position),
        ListKind::Doubly => doubly_trace(initial, operation, value, position),
        ListKind::Circular => circular_trace(initial, operation, value, position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_parses_from_its_key() {
        for kind in ListKind::ALL {
            assert_eq!(kind.key().parse::<ListKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "skip".parse::<ListKind>().unwrap_err();
        assert!(err.to_string().contains("skip"));
    }
}
