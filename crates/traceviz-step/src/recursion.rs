use serde::{Deserialize, Serialize};

/// What kind of transition a recursion step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecursionStepKind {
    /// A recursive call is entered.
    Call,
    /// A base case returns directly.
    Return,
    /// Results of the sub-calls are combined (or a disk is moved).
    Calculation,
}

/// Parameters of the traced call, one record per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallParams {
    Fibonacci {
        n: u32,
    },
    Hanoi {
        disks: u32,
        from: usize,
        to: usize,
        aux: usize,
    },
}

/// One node of the Fibonacci call tree, plotted for visualization.
///
/// Layout follows binary-tree indexing: a node at `position` places its
/// children at `position * 2` and `position * 2 + 1`, with
/// `x = position * 100 + 300` and `y = depth * 80 + 50`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique within one trace.
    pub id: String,
    pub value: u32,
    pub x: i64,
    pub y: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Snapshot of the three Hanoi pegs, largest disk at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiState {
    pub towers: [Vec<u32>; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u32>,
    /// Monotonically increasing; the final step reaches `2^n - 1`.
    pub move_count: u64,
}

impl HanoiState {
    /// Snapshot between moves.
    pub fn observe(towers: &[Vec<u32>; 3], move_count: u64) -> Self {
        Self {
            towers: towers.clone(),
            from: None,
            to: None,
            disk: None,
            move_count,
        }
    }

    /// Snapshot taken right after moving `disk` from peg `from` to peg `to`.
    pub fn moved(towers: &[Vec<u32>; 3], from: usize, to: usize, disk: u32, move_count: u64) -> Self {
        Self {
            towers: towers.clone(),
            from: Some(from),
            to: Some(to),
            disk: Some(disk),
            move_count,
        }
    }
}

/// One recorded transition of a recursive algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecursionStep {
    #[serde(rename = "type")]
    pub kind: RecursionStepKind,
    pub function_name: String,
    pub parameters: CallParams,
    /// Recursion depth of the call this step belongs to.
    pub stack_depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_value: Option<u64>,
    /// Human-readable narration of this transition.
    pub description: String,
    /// Call-tree node for Fibonacci traces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_node: Option<TreeNode>,
    /// Peg snapshot for Hanoi traces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hanoi_state: Option<HanoiState>,
}

impl RecursionStep {
    pub fn new(
        kind: RecursionStepKind,
        function_name: impl Into<String>,
        parameters: CallParams,
        stack_depth: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            function_name: function_name.into(),
            parameters,
            stack_depth,
            current_value: None,
            return_value: None,
            description: description.into(),
            tree_node: None,
            hanoi_state: None,
        }
    }
}
