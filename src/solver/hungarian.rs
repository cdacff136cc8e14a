//! Hungarian method for minimum-cost assignment.
//!
//! # Algorithm
//!
//! Shortest augmenting paths with dual potentials `u` (events) and
//! `v` (slots). Each event is inserted in turn; a Dijkstra-like sweep
//! over reduced costs `c[i][j] - u[i] - v[j]` finds the cheapest
//! alternating path to a free slot, the potentials are shifted by the
//! path slack, and the matching is flipped along the path. Reduced
//! costs stay non-negative throughout, which is what makes the final
//! matching optimal.
//!
//! # Complexity
//! O(n²·m) for n events and m ≥ n slots; O(n³) when square.
//!
//! # Reference
//! Jonker & Volgenant (1987), "A Shortest Augmenting Path Algorithm for
//! Dense and Sparse Linear Assignment Problems"

use tracing::{debug, warn};

use super::Solution;
use crate::error::{Result, ScheduleError};
use crate::models::CostMatrix;

const UNMATCHED: usize = usize::MAX;

/// Finds a minimum-cost assignment of every event to a distinct slot.
///
/// Works for any `num_events <= num_slots`; the dispatcher uses it for
/// square matrices, where the result is a perfect matching.
///
/// # Errors
/// `Optimization` if there are more events than slots or the matching
/// comes out non-injective.
pub fn solve(costs: &CostMatrix) -> Result<Solution> {
    let n = costs.num_events();
    let m = costs.num_slots();
    if n > m {
        return Err(ScheduleError::optimization(format!(
            "cannot match {n} events into {m} slots"
        )));
    }

    // 1-based; index 0 is the virtual root of each augmenting tree.
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; m + 1];
    // row_of[j]: event matched to slot j (0 = free)
    let mut row_of = vec![0_usize; m + 1];
    let mut way = vec![0_usize; m + 1];

    for i in 1..=n {
        row_of[0] = i;
        let mut j0 = 0;
        let mut min_slack = vec![f64::INFINITY; m + 1];
        let mut visited = vec![false; m + 1];

        loop {
            visited[j0] = true;
            let i0 = row_of[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0;

            for j in 1..=m {
                if visited[j] {
                    continue;
                }
                let reduced = costs.get(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            if j1 == 0 {
                return Err(ScheduleError::optimization(format!(
                    "no augmenting path for event {}",
                    i - 1
                )));
            }

            for j in 0..=m {
                if visited[j] {
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }

        // Flip the matching along the augmenting path.
        loop {
            let j1 = way[j0];
            row_of[j0] = row_of[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![UNMATCHED; n];
    for j in 1..=m {
        if row_of[j] != 0 {
            assignment[row_of[j] - 1] = j - 1;
        }
    }

    let candidate = Solution {
        assignment,
        score: 0.0,
    };
    if !candidate.is_injective(m) {
        warn!(events = n, slots = m, "Matching is not injective");
        return Err(ScheduleError::optimization(
            "matching did not assign every event to a distinct slot",
        ));
    }

    let solution = Solution::evaluate(costs, candidate.assignment);
    debug!(events = n, slots = m, score = solution.score, "Hungarian matching finished");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::exhaustive;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn matrix(rows: Vec<Vec<f64>>) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn random_matrix(rng: &mut SmallRng, n: usize, m: usize) -> CostMatrix {
        let rows = (0..n)
            .map(|_| (0..m).map(|_| rng.random_range(1..=10) as f64).collect())
            .collect();
        matrix(rows)
    }

    #[test]
    fn test_two_by_two() {
        let s = solve(&matrix(vec![vec![1.0, 5.0], vec![5.0, 1.0]])).unwrap();
        assert_eq!(s.assignment, vec![0, 1]);
        assert_eq!(s.score, 2.0);
    }

    #[test]
    fn test_three_by_three() {
        let costs = matrix(vec![
            vec![2.0, 1.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![3.0, 3.0, 1.0],
        ]);
        let s = solve(&costs).unwrap();
        assert_eq!(s.score, 3.0);
        assert!(s.is_permutation(3));
    }

    #[test]
    fn test_anti_diagonal() {
        let costs = matrix(vec![
            vec![9.0, 9.0, 9.0, 1.0],
            vec![9.0, 9.0, 1.0, 9.0],
            vec![9.0, 1.0, 9.0, 9.0],
            vec![1.0, 9.0, 9.0, 9.0],
        ]);
        let s = solve(&costs).unwrap();
        assert_eq!(s.assignment, vec![3, 2, 1, 0]);
        assert_eq!(s.score, 4.0);
    }

    #[test]
    fn test_greedy_trap() {
        // Greedy takes (0,0)=1 and is forced into (1,1)=100.
        let costs = matrix(vec![vec![1.0, 2.0], vec![3.0, 100.0]]);
        let s = solve(&costs).unwrap();
        assert_eq!(s.assignment, vec![1, 0]);
        assert_eq!(s.score, 5.0);
    }

    #[test]
    fn test_rectangular_more_slots() {
        let costs = matrix(vec![
            vec![1.0, 9.0, 9.0, 2.0],
            vec![1.0, 9.0, 9.0, 9.0],
        ]);
        let s = solve(&costs).unwrap();
        assert_eq!(s.assignment, vec![3, 0]);
        assert_eq!(s.score, 3.0);
    }

    #[test]
    fn test_more_events_than_slots_fails() {
        let costs = matrix(vec![vec![1.0], vec![1.0]]);
        assert!(matches!(
            solve(&costs),
            Err(ScheduleError::Optimization { .. })
        ));
    }

    #[test]
    fn test_zero_costs() {
        let s = solve(&matrix(vec![vec![0.0; 3]; 3])).unwrap();
        assert!(s.is_permutation(3));
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_agrees_with_exhaustive() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in 1..=6 {
            for _ in 0..20 {
                let costs = random_matrix(&mut rng, n, n);
                let exact = solve(&costs).unwrap();
                let reference = exhaustive::solve(&costs).unwrap();
                assert!(exact.is_permutation(n));
                assert_eq!(exact.score, reference.score);
            }
        }
    }
}
