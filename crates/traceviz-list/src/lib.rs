//! Linked-list tracers: run an insert, search, or delete over an
//! index-addressed node table and record every traversal hop, comparison,
//! and splice as a [`ListStep`](traceviz_step::list::ListStep).
//!
//! Lists are encoded as a flat table of nodes whose `next`/`prev` pointers
//! are table indices. Head and tail are not stored; each call re-derives
//! them from the table (see [`table`]). Deleting the head is the one
//! operation that physically removes a slot and renumbers the survivors;
//! every other delete unlinks and leaves indices stable.

mod circular;
mod doubly;
mod singly;
mod table;

pub mod catalog;

pub use catalog::{execute, ListKind};
pub use circular::circular_trace;
pub use doubly::doubly_trace;
pub use singly::singly_trace;
