//! Naive reference model shared by the integration tests

#![allow(dead_code)]

/// Array with linear-time sums, used as ground truth
#[derive(Debug, Clone)]
pub struct NaiveArray {
    values: Vec<i64>,
}

impl NaiveArray {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn set(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    /// Sum over [left, right) clamped to the array
    pub fn sum(&self, left: usize, right: usize) -> i128 {
        let right = right.min(self.values.len());
        if left >= right {
            return 0;
        }
        self.values[left..right].iter().map(|&v| i128::from(v)).sum()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

/// The six-element scenario used throughout the docs
pub fn odd_numbers() -> Vec<i64> {
    vec![1, 3, 5, 7, 9, 11]
}
