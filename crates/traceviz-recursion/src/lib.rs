//! Recursion tracers: record every call, base-case return, and combination
//! step of a recursive algorithm as a
//! [`RecursionStep`](traceviz_step::recursion::RecursionStep).
//!
//! All structural state (tree positions, tower contents, node identifiers)
//! is recomputed from `n` and the recursion path on every call, so repeated
//! invocations with the same input produce identical traces.

mod fibonacci;
mod hanoi;

pub mod catalog;

pub use catalog::{execute, RecursionKind};
pub use fibonacci::fibonacci_trace;
pub use hanoi::hanoi_trace;
