//! Advisory input caps keeping trace lengths tractable.
//!
//! The engines are total and accept any input; callers that drive playback
//! validate against these caps before asking for a trace, since trace
//! length grows exponentially for the recursive algorithms.

use serde::{Deserialize, Serialize};

/// Input caps for a playback session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum sequence length for sort and search traces.
    pub max_sequence_len: usize,
    /// Maximum `n` for a Fibonacci trace (binary recursion, O(2^n) steps).
    pub max_fibonacci_n: u32,
    /// Maximum disk count for a Tower of Hanoi trace.
    pub max_hanoi_disks: u32,
    /// Maximum node count for a linked-list trace.
    pub max_list_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_sequence_len: 50,
            max_fibonacci_n: 10,
            max_hanoi_disks: 6,
            max_list_len: 20,
        }
    }
}

/// An input cap violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitViolation {
    #[error("Sequence of {len} elements exceeds the cap of {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("fibonacci({n}) exceeds the cap of n = {max}")]
    FibonacciTooDeep { n: u32, max: u32 },

    #[error("{disks} disks exceed the cap of {max}")]
    TooManyDisks { disks: u32, max: u32 },

    #[error("List of {len} nodes exceeds the cap of {max}")]
    ListTooLong { len: usize, max: usize },
}

impl InputLimits {
    pub fn check_sequence(&self, len: usize) -> Result<(), LimitViolation> {
        if len > self.max_sequence_len {
            return Err(LimitViolation::SequenceTooLong {
                len,
                max: self.max_sequence_len,
            });
        }
        Ok(())
    }

    pub fn check_fibonacci(&self, n: u32) -> Result<(), LimitViolation> {
        if n > self.max_fibonacci_n {
            return Err(LimitViolation::FibonacciTooDeep {
                n,
                max: self.max_fibonacci_n,
            });
        }
        Ok(())
    }

    pub fn check_hanoi(&self, disks: u32) -> Result<(), LimitViolation> {
        if disks > self.max_hanoi_disks {
            return Err(LimitViolation::TooManyDisks {
                disks,
                max: self.max_hanoi_disks,
            });
        }
        Ok(())
    }

    pub fn check_list(&self, len: usize) -> Result<(), LimitViolation> {
        if len > self.max_list_len {
            return Err(LimitViolation::ListTooLong {
                len,
                max: self.max_list_len,
            });
        }
        Ok(())
    }
}
