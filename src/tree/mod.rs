//! Interval-sum segment tree
//!
//! Flat tree array with implicit child arithmetic: root at slot 1,
//! children of slot i at 2i and 2i + 1. Node intervals are never stored;
//! they are recomputed from the root interval [0, N) on every descent.
//!
//! Aggregates are widened to `i128`, so no interval sum over `i64`
//! elements can overflow.

mod node;

pub use node::{SegmentNode, ROOT_INDEX};

use std::ops::{Bound, RangeBounds};

use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::IntervalSumError;

/// Segment tree answering range sums and point updates in O(log N)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSumTree {
    /// Current element values
    values: Vec<i64>,

    /// Interval aggregates, indexed by [`SegmentNode::index`]
    tree: Vec<i128>,

    config: TreeConfig,
}

impl IntervalSumTree {
    /// Build a tree over `values` using conservative (4N) sizing.
    ///
    /// # Panics
    ///
    /// If 4N overflows `usize`, the same condition under which
    /// `Vec::with_capacity` would panic.
    pub fn new(values: Vec<i64>) -> Self {
        Self::with_config(values, TreeConfig::default()).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Build a tree over `values` with explicit sizing.
    pub fn with_config(values: Vec<i64>, config: TreeConfig) -> Result<Self, IntervalSumError> {
        let capacity = config.capacity_for(values.len())?;

        let mut tree = Self {
            values,
            tree: vec![0; capacity],
            config,
        };
        if !tree.is_empty() {
            tree.build(SegmentNode::root(tree.len()));
        }

        debug!(
            len = tree.len(),
            capacity,
            sizing = ?config.sizing,
            "built interval sum tree"
        );
        Ok(tree)
    }

    /// Children are fully computed before the parent reads them back.
    fn build(&mut self, node: SegmentNode) {
        if node.is_leaf() {
            self.tree[node.index] = i128::from(self.values[node.left]);
            return;
        }

        let (left, right) = node.children();
        self.build(left);
        self.build(right);
        self.tree[node.index] = self.tree[left.index] + self.tree[right.index];
    }

    /// Replace the element at `index` with `value`.
    ///
    /// Every node on the root-to-leaf path is adjusted by `value - old`;
    /// the leaf itself is overwritten.
    pub fn update(&mut self, index: usize, value: i64) -> Result<(), IntervalSumError> {
        let len = self.len();
        if index >= len {
            return Err(IntervalSumError::IndexOutOfRange { index, len });
        }

        let delta = i128::from(value) - i128::from(self.values[index]);
        trace!(index, value, delta, "point update");
        self.update_path(SegmentNode::root(len), index, value, delta);
        Ok(())
    }

    fn update_path(&mut self, node: SegmentNode, index: usize, value: i64, delta: i128) {
        self.tree[node.index] += delta;

        if node.is_leaf() {
            self.values[index] = value;
            self.tree[node.index] = i128::from(value);
            return;
        }

        self.update_path(node.child_containing(index), index, value, delta);
    }

    /// Sum of elements in the half-open interval `[left, right)`.
    ///
    /// Empty intervals and intervals outside `[0, N)` sum to 0.
    pub fn sum(&self, left: usize, right: usize) -> i128 {
        if left >= right || self.is_empty() {
            return 0;
        }
        self.sum_within(SegmentNode::root(self.len()), left, right)
    }

    fn sum_within(&self, node: SegmentNode, left: usize, right: usize) -> i128 {
        if node.is_disjoint_from(left, right) {
            return 0;
        }

        // node interval is inside the query interval
        if node.is_covered_by(left, right) {
            return self.tree[node.index];
        }

        let (left_child, right_child) = node.children();
        self.sum_within(left_child, left, right) + self.sum_within(right_child, left, right)
    }

    /// [`sum`](Self::sum) over a range expression such as `2..5`, `..=3` or `..`.
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> i128 {
        let left = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let right = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len(),
        };
        self.sum(left, right)
    }

    /// Sum of all elements, read from the root in O(1).
    pub fn total(&self) -> i128 {
        if self.is_empty() {
            0
        } else {
            self.tree[ROOT_INDEX]
        }
    }

    /// Current value at `index`.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Current element values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements N.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tree was built over zero elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Length of the tree array.
    pub fn capacity(&self) -> usize {
        self.tree.len()
    }

    /// Configuration used at construction.
    pub fn config(&self) -> TreeConfig {
        self.config
    }
}

impl From<Vec<i64>> for IntervalSumTree {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i64> for IntervalSumTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
