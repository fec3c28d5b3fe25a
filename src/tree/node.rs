//! Implicit tree node representation
//!
//! Node = half-open interval [left, right) ⊆ [0, N) plus its slot in the tree array
//! Children computed via midpoint: m = ⌊(left + right) / 2⌋
//!   Left child: [left, m) at slot 2i
//!   Right child: [m, right) at slot 2i + 1

use std::fmt;

/// Slot of the root node in the tree array. Slot 0 is never used.
pub const ROOT_INDEX: usize = 1;

/// Tree node (implicit - an interval and a slot, recomputed on descent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentNode {
    /// Slot in the tree array
    pub index: usize,

    /// Left element index (inclusive)
    pub left: usize,

    /// Right element index (exclusive)
    pub right: usize,
}

impl SegmentNode {
    /// Create root spanning [0, len)
    pub fn root(len: usize) -> Self {
        Self {
            index: ROOT_INDEX,
            left: 0,
            right: len,
        }
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left + 1 == self.right
    }

    /// Interval width
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    /// Split point: m = ⌊(left + right) / 2⌋
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.left + self.right) / 2
    }

    /// Get children via midpoint split
    ///
    /// Returns: ([left, mid) at 2i, [mid, right) at 2i + 1)
    pub fn children(&self) -> (SegmentNode, SegmentNode) {
        debug_assert!(self.width() > 1, "Leaf has no children");

        let mid = self.midpoint();
        let left_child = SegmentNode {
            index: 2 * self.index,
            left: self.left,
            right: mid,
        };
        let right_child = SegmentNode {
            index: 2 * self.index + 1,
            left: mid,
            right: self.right,
        };

        (left_child, right_child)
    }

    /// Child whose interval holds `position`
    pub fn child_containing(&self, position: usize) -> SegmentNode {
        debug_assert!(self.contains(position));

        let (left_child, right_child) = self.children();
        if position < left_child.right {
            left_child
        } else {
            right_child
        }
    }

    /// Whether `position` lies in [left, right)
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.left <= position && position < self.right
    }

    /// No overlap with the query interval [left, right)
    #[inline]
    pub fn is_disjoint_from(&self, left: usize, right: usize) -> bool {
        left >= self.right || right <= self.left
    }

    /// Node interval lies entirely inside the query interval [left, right)
    #[inline]
    pub fn is_covered_by(&self, left: usize, right: usize) -> bool {
        left <= self.left && right >= self.right
    }

    /// Number of splits from this node down to a leaf along the leftmost path
    ///
    /// The right child of a split is never narrower than the left, so the
    /// rightmost path can be one level deeper; both are O(log(width)).
    pub fn depth_to_leaf(&self) -> usize {
        let mut node = *self;
        let mut depth = 0;

        while node.width() > 1 {
            let (left_child, _) = node.children();
            node = left_child;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for SegmentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})@{}", self.left, self.right, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_split() {
        let node = SegmentNode::root(100);
        let (left, right) = node.children();

        assert_eq!((left.left, left.right, left.index), (0, 50, 2));
        assert_eq!((right.left, right.right, right.index), (50, 100, 3));
    }

    #[test]
    fn test_odd_width_split_favours_right() {
        let node = SegmentNode::root(5);
        let (left, right) = node.children();

        assert_eq!(left.width(), 2);
        assert_eq!(right.width(), 3);
        assert_eq!(left.right, right.left);
    }

    #[test]
    fn test_child_containing() {
        let node = SegmentNode::root(6);
        assert_eq!(node.child_containing(2).index, 2);
        assert_eq!(node.child_containing(3).index, 3);
        assert_eq!(node.child_containing(5).index, 3);
    }

    #[test]
    fn test_overlap_predicates() {
        let node = SegmentNode {
            index: 3,
            left: 3,
            right: 6,
        };

        assert!(node.is_disjoint_from(6, 9));
        assert!(node.is_disjoint_from(0, 3));
        assert!(node.is_disjoint_from(4, 4));
        assert!(!node.is_disjoint_from(5, 9));

        assert!(node.is_covered_by(0, 6));
        assert!(node.is_covered_by(3, 6));
        assert!(!node.is_covered_by(4, 6));
    }

    #[test]
    fn test_geometric_shrinkage() {
        let root = SegmentNode::root(128);
        let mut node = root;
        let mut widths = vec![node.width()];

        while !node.is_leaf() {
            let (left, _) = node.children();
            node = left;
            widths.push(node.width());
        }

        for window in widths.windows(2) {
            let parent = window[0];
            let child = window[1];
            assert!(
                child <= (parent + 1) / 2,
                "Child width {} should be <= ⌈parent {}/2⌉",
                child,
                parent
            );
        }

        assert_eq!(root.depth_to_leaf(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(SegmentNode::root(4).to_string(), "[0, 4)@1");
    }
}
