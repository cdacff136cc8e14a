//! Event × slot cost matrix.
//!
//! Rows are events, columns are slots. Each entry is a non-negative
//! preference cost (lower = more preferred). Stored row-major in one
//! contiguous buffer.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::validation::validate_costs;

/// A validated, dense cost matrix.
///
/// Construction through [`CostMatrix::from_rows`] guarantees at least one
/// row and column, equal row lengths, and finite non-negative entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    num_events: usize,
    num_slots: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, validating shape and values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        validate_costs(&rows)?;
        let num_events = rows.len();
        let num_slots = rows[0].len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            num_events,
            num_slots,
            data,
        })
    }

    /// Number of events (rows).
    #[inline]
    pub fn num_events(&self) -> usize {
        self.num_events
    }

    /// Number of slots (columns).
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_events == self.num_slots
    }

    /// Cost of placing `event` in `slot`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn get(&self, event: usize, slot: usize) -> f64 {
        assert!(slot < self.num_slots, "slot index {slot} out of range");
        self.data[event * self.num_slots + slot]
    }

    /// All slot costs for one event.
    #[inline]
    pub fn row(&self, event: usize) -> &[f64] {
        let start = event * self.num_slots;
        &self.data[start..start + self.num_slots]
    }

    /// Lowest cost any slot offers this event.
    pub fn row_minimum(&self, event: usize) -> f64 {
        self.row(event).iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Sum of `cost[i][assignment[i]]` over the first `num_events` entries.
    ///
    /// Entries past `num_events` are ignored, so a full slot permutation
    /// can be scored directly.
    pub fn score(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .take(self.num_events)
            .enumerate()
            .map(|(event, &slot)| self.get(event, slot))
            .sum()
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks(self.num_slots)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = ScheduleError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(vec![vec![2.0, 1.0, 3.0], vec![1.0, 2.0, 3.0]]).unwrap()
    }

    #[test]
    fn test_shape() {
        let m = sample();
        assert_eq!(m.num_events(), 2);
        assert_eq!(m.num_slots(), 3);
        assert!(!m.is_square());
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.row(0), &[2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_row_minimum() {
        let m = sample();
        assert_eq!(m.row_minimum(0), 1.0);
        assert_eq!(m.row_minimum(1), 1.0);
    }

    #[test]
    fn test_score_ignores_trailing_slots() {
        let m = sample();
        assert_eq!(m.score(&[1, 0]), 2.0);
        assert_eq!(m.score(&[1, 0, 2]), 2.0);
    }

    #[test]
    fn test_rejects_negative() {
        let err = CostMatrix::from_rows(vec![vec![1.0, -1.0]]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_ragged() {
        assert!(CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_serde_as_nested_rows() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[2.0,1.0,3.0],[1.0,2.0,3.0]]");

        let back: CostMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        assert!(serde_json::from_str::<CostMatrix>("[[1.0],[-2.0]]").is_err());
    }
}
