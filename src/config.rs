//! Tree-array sizing
//!
//! Root at slot 1, children of slot i at 2i and 2i + 1. The deepest slot the
//! midpoint recursion can reach decides how long the tree array must be.

use crate::IntervalSumError;

/// Strategy for sizing the tree array from the element count N
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// 4N slots; safe for every recursion shape without further reasoning
    #[default]
    Conservative,

    /// 2 · next_power_of_two(N) slots
    ///
    /// Floor-midpoint recursion has depth ⌈log₂ N⌉, so every slot index
    /// stays below 2^(⌈log₂ N⌉ + 1).
    Tight,
}

/// Construction parameters for [`IntervalSumTree`](crate::IntervalSumTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeConfig {
    /// Tree-array sizing strategy
    pub sizing: Sizing,
}

impl TreeConfig {
    /// Configuration using [`Sizing::Tight`]
    pub fn tight() -> Self {
        Self {
            sizing: Sizing::Tight,
        }
    }

    /// Number of tree-array slots required for `len` elements
    pub fn capacity_for(&self, len: usize) -> Result<usize, IntervalSumError> {
        if len == 0 {
            return Ok(0);
        }

        let capacity = match self.sizing {
            Sizing::Conservative => len.checked_mul(4),
            Sizing::Tight => len
                .checked_next_power_of_two()
                .and_then(|size| size.checked_mul(2)),
        };

        capacity.ok_or(IntervalSumError::CapacityOverflow { len })
    }
}
