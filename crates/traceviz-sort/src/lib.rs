//! Sort trace engine.
//!
//! Each tracer runs one sorting algorithm over an internal copy of the
//! caller's sequence and records every comparison, swap, and placement as a
//! step. The final step always marks the full index range sorted; empty and
//! single-element input still yields the initial and final steps.

pub mod catalog;
mod distribution;
mod heap;
mod merge;
mod quick;
mod simple;

pub use catalog::{execute, SortKind};
pub use distribution::{bucket_trace, counting_trace, radix_trace};
pub use heap::heap_trace;
pub use merge::merge_trace;
pub use quick::quick_trace;
pub use simple::{bubble_trace, insertion_trace, selection_trace};

use traceviz_step::sort::SortStep;

/// Terminal step marking every index as sorted.
pub(crate) fn all_sorted(array: &[i64], description: &str) -> SortStep {
    SortStep {
        sorted: Some((0..array.len()).collect()),
        ..SortStep::snapshot(array, description)
    }
}
