use serde::{Deserialize, Serialize};

/// One recorded state transition of a sorting algorithm.
///
/// `array` is always a full snapshot of the working sequence, never a diff.
/// The remaining fields are populated only by the algorithms that use them;
/// a step with none of them set is a plain narrated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortStep {
    /// Full snapshot of the working sequence at this instant.
    pub array: Vec<i64>,
    /// Human-readable narration of this transition.
    pub description: String,
    /// Indices being compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,
    /// Indices that were just swapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swapping: Option<Vec<usize>>,
    /// Indices known to be in their final sorted position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<usize>>,
    /// Pivot index of the current partition (quick sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    /// Per-bucket contents (bucket sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<Vec<i64>>>,
    /// Occurrence counts (counting sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_array: Option<Vec<usize>>,
    /// Zero-based digit position of the current radix pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit: Option<u32>,
    /// Size of the live heap region (heap sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heap_size: Option<usize>,
}

impl SortStep {
    /// A narrated snapshot with no highlights. Engines build richer steps
    /// from this with struct update syntax.
    pub fn snapshot(array: &[i64], description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            description: description.into(),
            comparing: None,
            swapping: None,
            sorted: None,
            pivot: None,
            left: None,
            right: None,
            mid: None,
            buckets: None,
            count_array: None,
            digit: None,
            heap_size: None,
        }
    }
}
