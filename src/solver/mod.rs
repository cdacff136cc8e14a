//! Exact assignment solvers.
//!
//! - [`exhaustive`]: depth-first enumeration of every injective
//!   event-to-slot mapping with cost bounding. Exponential; small inputs only.
//! - [`hungarian`]: minimum-cost perfect matching with row/column
//!   potentials. O(n²·m) for n events and m ≥ n slots.
//!
//! Both return a [`Solution`]: a slot index per event and its total cost.
//!
//! # References
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"

pub mod exhaustive;
pub mod hungarian;

use serde::{Deserialize, Serialize};

use crate::models::CostMatrix;

/// An assignment as slot indices, with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// `assignment[i]` is the slot index of event `i`.
    pub assignment: Vec<usize>,
    /// Sum of the assigned costs.
    pub score: f64,
}

impl Solution {
    /// Scores an assignment against a cost matrix.
    pub fn evaluate(costs: &CostMatrix, assignment: Vec<usize>) -> Self {
        let score = costs.score(&assignment);
        Self { assignment, score }
    }

    /// Whether every index is below `num_slots` and no slot repeats.
    pub fn is_injective(&self, num_slots: usize) -> bool {
        let mut used = vec![false; num_slots];
        self.assignment.iter().all(|&slot| {
            slot < num_slots && !std::mem::replace(&mut used[slot], true)
        })
    }

    /// Whether this is a full permutation of `0..num_slots`.
    pub fn is_permutation(&self, num_slots: usize) -> bool {
        self.assignment.len() == num_slots && self.is_injective(num_slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let costs = CostMatrix::from_rows(vec![vec![1.0, 5.0], vec![5.0, 1.0]]).unwrap();
        let s = Solution::evaluate(&costs, vec![1, 0]);
        assert_eq!(s.score, 10.0);
    }

    #[test]
    fn test_injective() {
        let s = Solution {
            assignment: vec![2, 0],
            score: 0.0,
        };
        assert!(s.is_injective(3));
        assert!(!s.is_permutation(3));
        assert!(!s.is_injective(2));

        let dup = Solution {
            assignment: vec![1, 1],
            score: 0.0,
        };
        assert!(!dup.is_injective(3));
    }
}
