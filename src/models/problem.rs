//! Assignment problem input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::CostMatrix;
use crate::validation::{validate_input, ValidationResult};

/// Events, slots, and their cost matrix as one input bundle.
///
/// This is the shape a form or API payload deserializes into. It is not
/// validated on construction; call [`ScheduleProblem::validate`] or let
/// the optimizer do it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleProblem {
    /// Event labels, one per cost matrix row.
    pub events: Vec<String>,
    /// Slot labels, one per cost matrix column.
    pub slots: Vec<String>,
    /// `costs[i][j]` is the cost of placing event `i` in slot `j`.
    pub costs: Vec<Vec<f64>>,
}

impl ScheduleProblem {
    pub fn new(events: Vec<String>, slots: Vec<String>, costs: Vec<Vec<f64>>) -> Self {
        Self {
            events,
            slots,
            costs,
        }
    }

    /// Adds an event with its cost per slot.
    pub fn with_event(mut self, event: impl Into<String>, costs: Vec<f64>) -> Self {
        self.events.push(event.into());
        self.costs.push(costs);
        self
    }

    /// Sets the slot labels.
    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    pub fn num_events(&self) -> usize {
        self.events.len()
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.events, &self.slots, &self.costs)
    }

    /// Validates the whole problem and returns its cost matrix.
    pub fn cost_matrix(&self) -> Result<CostMatrix> {
        self.validate()?;
        CostMatrix::from_rows(self.costs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[test]
    fn test_builder() {
        let problem = ScheduleProblem::default()
            .with_slots(["9:00", "11:00"])
            .with_event("A", vec![1.0, 5.0])
            .with_event("B", vec![5.0, 1.0]);
        assert_eq!(problem.num_events(), 2);
        assert_eq!(problem.num_slots(), 2);
        assert!(problem.validate().is_ok());
        assert!(problem.cost_matrix().unwrap().is_square());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "events": ["Standup", "Review", "Lunch"],
            "slots": ["9:00 AM", "11:00 AM", "2:00 PM", "4:00 PM"],
            "costs": [[1, 5, 7, 9], [4, 2, 3, 8], [10, 10, 1, 2]]
        }"#;
        let problem: ScheduleProblem = serde_json::from_str(json).unwrap();
        let costs = problem.cost_matrix().unwrap();
        assert_eq!(costs.num_events(), 3);
        assert_eq!(costs.num_slots(), 4);
        assert_eq!(costs.get(2, 2), 1.0);
    }

    #[test]
    fn test_mismatched_labels_rejected() {
        let problem = ScheduleProblem::new(
            vec!["A".into()],
            vec!["9:00".into(), "11:00".into()],
            vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        );
        assert!(matches!(
            problem.cost_matrix(),
            Err(ScheduleError::InvalidInput { .. })
        ));
    }
}
