use serde::{Deserialize, Serialize};

/// Index value reported by a terminal step when the target is absent.
pub const NOT_FOUND: i64 = -1;

/// One recorded state transition of a search algorithm.
///
/// `left`/`right`/`mid` are signed because the binary-search window can
/// close past either end of the sequence (`right` reaches −1 when the
/// target is smaller than every element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    /// Index under inspection, or [`NOT_FOUND`] on a terminal miss.
    pub index: i64,
    /// Whether this step records a comparison event.
    pub comparison: bool,
    pub found: bool,
    /// Human-readable narration of this transition.
    pub description: String,
    /// Value at the inspected index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_element: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<i64>,
    /// Block size of a jump search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_size: Option<usize>,
}

impl SearchStep {
    pub fn new(index: i64, comparison: bool, found: bool, description: impl Into<String>) -> Self {
        Self {
            index,
            comparison,
            found,
            description: description.into(),
            current_element: None,
            left: None,
            right: None,
            mid: None,
            jump_size: None,
        }
    }

    /// Terminal step reporting that the target is absent.
    pub fn miss(description: impl Into<String>) -> Self {
        Self::new(NOT_FOUND, false, false, description)
    }
}
