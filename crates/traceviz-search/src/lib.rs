//! Search tracers: run a search algorithm over a sequence and record every
//! probe as a [`SearchStep`](traceviz_step::search::SearchStep).
//!
//! Binary search sorts a copy of its input before searching, so the indices
//! in its trace refer to the sorted order. Jump and exponential search
//! require sorted input and leave that to the caller.

mod binary;
mod exponential;
mod jump;
mod linear;

pub mod catalog;

pub use binary::binary_trace;
pub use catalog::{execute, SearchKind};
pub use exponential::exponential_trace;
pub use jump::jump_trace;
pub use linear::linear_trace;
