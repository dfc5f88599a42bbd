use serde::{Deserialize, Serialize};

/// One slot of the index-addressed node table. Pointers are table indices,
/// not references; `prev` is only populated by the doubly linked variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode {
    pub value: i64,
    pub next: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<usize>,
}

/// The operation a linked-list trace was asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOperation {
    Insert,
    Search,
    Delete,
}

impl ListOperation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Search => "search",
            Self::Delete => "delete",
        }
    }

    /// The step kind non-traversal steps of this operation carry.
    pub fn step_kind(self) -> ListStepKind {
        match self {
            Self::Insert => ListStepKind::Insert,
            Self::Search => ListStepKind::Search,
            Self::Delete => ListStepKind::Delete,
        }
    }
}

/// What kind of transition a linked-list step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStepKind {
    Insert,
    Search,
    Delete,
    /// A hop along `next` pointers on the way to a position.
    Traverse,
}

/// One recorded transition of a linked-list operation.
///
/// `nodes` plus `head` (and `tail` for the doubly variant) are a full
/// snapshot: enough to redraw the list without replaying earlier steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStep {
    #[serde(rename = "type")]
    pub kind: ListStepKind,
    /// Short label for the sub-operation ("Insert at head", ...).
    pub operation: String,
    /// Full snapshot of the node table at this instant.
    pub nodes: Vec<ListNode>,
    pub head: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<usize>,
    pub current_node: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_node: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_node: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Human-readable narration of this transition.
    pub description: String,
}

impl ListStep {
    pub fn new(
        kind: ListStepKind,
        operation: impl Into<String>,
        nodes: &[ListNode],
        head: Option<usize>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            operation: operation.into(),
            nodes: nodes.to_vec(),
            head,
            tail: None,
            current_node: None,
            target_node: None,
            new_node: None,
            comparing: None,
            found: None,
            completed: None,
            description: description.into(),
        }
    }
}
