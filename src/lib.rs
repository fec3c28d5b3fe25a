//! # Interval-Sum Segment Tree
//!
//! A fixed-size integer array supporting point update and range-sum query,
//! both in O(log N).
//!
//! ## Core Algorithm
//!
//! 1. **Implicit tree**: flat array, root at slot 1, children at 2i and 2i + 1
//! 2. **Midpoint recursion**: node [l, r) splits at m = ⌊(l + r) / 2⌋ into [l, m) and [m, r)
//! 3. **Delta update**: every node on the root-to-leaf path gains `new - old`
//! 4. **Pruned query**: disjoint nodes contribute 0, covered nodes their stored sum
//!
//! ## Usage Example
//!
//! ```
//! use interval_sum_tree::IntervalSumTree;
//!
//! let mut tree = IntervalSumTree::new(vec![1, 3, 5, 7, 9, 11]);
//! assert_eq!(tree.sum(1, 3), 8);
//!
//! tree.update(2, 100)?;
//! assert_eq!(tree.sum(0, 6), 131);
//! # Ok::<(), interval_sum_tree::IntervalSumError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config; // Tree-array sizing
pub mod script; // Line-oriented command driver
pub mod tree; // Segment tree and implicit nodes

pub use config::{Sizing, TreeConfig};
pub use script::{run_script, Command, Outcome, ScriptError, Session};
pub use tree::{IntervalSumTree, SegmentNode};

use thiserror::Error;

/// Errors raised by [`IntervalSumTree`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalSumError {
    /// Point update addressed an element outside [0, N)
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// Requested element index
        index: usize,
        /// Number of elements N
        len: usize,
    },

    /// Tree array for N elements cannot be addressed
    #[error("tree array for {len} elements exceeds addressable capacity")]
    CapacityOverflow {
        /// Number of elements N
        len: usize,
    },
}
