//! Shared step vocabulary for the trace engines.
//!
//! A trace is a finite, non-empty sequence of steps produced eagerly by one
//! `execute` call, before any playback happens. Every snapshot-bearing step
//! owns a deep copy of the structure it describes, so steps stay
//! independently inspectable after the engine returns. The step array is the
//! wire format between the engines and the external player; field names
//! serialize in camelCase and absent variant fields are omitted.

pub mod catalog;
pub mod limits;
pub mod list;
pub mod recursion;
pub mod search;
pub mod sort;

pub use catalog::{AlgorithmInfo, UnknownAlgorithm};
pub use limits::{InputLimits, LimitViolation};
