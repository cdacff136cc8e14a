//! Exhaustive search over injective assignments.
//!
//! # Algorithm
//!
//! Depth-first enumeration of every k-permutation of slot indices
//! (k = number of events), visiting slots in ascending order so
//! candidates appear in lexicographic order. The first minimum found
//! wins ties.
//!
//! A branch is cut when its partial cost plus the row minima of the
//! unassigned events already reaches the incumbent. Costs are
//! non-negative, so in exact arithmetic a cut branch can only tie or
//! lose and the result matches plain enumeration. The bound sums costs
//! in a different order than the leaf total, so with non-integer costs
//! rounding may cut a leaf that is better by about one ulp.
//!
//! # Complexity
//! O(m! / (m - n)!) leaves for n events and m slots, O(n) each.
//! The dispatcher only routes small inputs here.

use tracing::debug;

use super::Solution;
use crate::error::{Result, ScheduleError};
use crate::models::CostMatrix;

/// Finds a minimum-cost injective assignment by enumeration.
///
/// # Errors
/// `Optimization` if no candidate exists (more events than slots).
pub fn solve(costs: &CostMatrix) -> Result<Solution> {
    let mut search = Search::new(costs);
    search.descend(0, 0.0);

    debug!(
        events = costs.num_events(),
        slots = costs.num_slots(),
        leaves = search.leaves,
        pruned = search.pruned,
        "Exhaustive search finished"
    );

    match search.best {
        Some(assignment) => Ok(Solution {
            assignment,
            score: search.best_score,
        }),
        None => Err(ScheduleError::optimization(format!(
            "exhaustive search found no candidate for {} events and {} slots",
            costs.num_events(),
            costs.num_slots()
        ))),
    }
}

struct Search<'a> {
    costs: &'a CostMatrix,
    /// remaining_bound[i] = sum of row minima for events i..n.
    remaining_bound: Vec<f64>,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Option<Vec<usize>>,
    best_score: f64,
    leaves: u64,
    pruned: u64,
}

impl<'a> Search<'a> {
    fn new(costs: &'a CostMatrix) -> Self {
        let n = costs.num_events();
        let mut remaining_bound = vec![0.0; n + 1];
        for event in (0..n).rev() {
            remaining_bound[event] = remaining_bound[event + 1] + costs.row_minimum(event);
        }

        Self {
            costs,
            remaining_bound,
            used: vec![false; costs.num_slots()],
            current: Vec::with_capacity(n),
            best: None,
            best_score: f64::INFINITY,
            leaves: 0,
            pruned: 0,
        }
    }

    fn descend(&mut self, event: usize, partial: f64) {
        if event == self.costs.num_events() {
            self.leaves += 1;
            if self.best.is_none() || partial < self.best_score {
                self.best_score = partial;
                self.best = Some(self.current.clone());
            }
            return;
        }

        if self.best.is_some() && partial + self.remaining_bound[event] >= self.best_score {
            self.pruned += 1;
            return;
        }

        for slot in 0..self.costs.num_slots() {
            if self.used[slot] {
                continue;
            }
            self.used[slot] = true;
            self.current.push(slot);
            self.descend(event + 1, partial + self.costs.get(event, slot));
            self.current.pop();
            self.used[slot] = false;
        }
    }
}
