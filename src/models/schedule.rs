//! Schedule (solution) model.
//!
//! A schedule places every event in exactly one slot. It keeps the
//! input order of events, so presentation and calendar layers can walk
//! it as ordered (event, slot) pairs.

use serde::{Deserialize, Serialize};

use crate::models::CostMatrix;
use crate::scheduler::Strategy;

/// A complete schedule (solution to an assignment problem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// One assignment per event, in event input order.
    pub assignments: Vec<SlotAssignment>,
    /// Sum of the assigned costs (lower is better).
    pub total_score: f64,
    /// Strategy that produced this schedule.
    pub strategy: Strategy,
}

/// An event-slot assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Event label.
    pub event: String,
    /// Slot label.
    pub slot: String,
    /// Row index of the event in the cost matrix.
    pub event_index: usize,
    /// Column index of the slot in the cost matrix.
    pub slot_index: usize,
    /// Cost of this placement.
    pub cost: f64,
}

impl Schedule {
    /// Builds a schedule from a slot index per event.
    ///
    /// `assignment[i]` is the slot index of event `i`. Labels are looked up
    /// positionally; `events`, `slots`, and `costs` must agree in shape.
    pub(crate) fn from_assignment<E, S>(
        events: &[E],
        slots: &[S],
        costs: &CostMatrix,
        assignment: &[usize],
        strategy: Strategy,
    ) -> Self
    where
        E: AsRef<str>,
        S: AsRef<str>,
    {
        let assignments: Vec<SlotAssignment> = events
            .iter()
            .zip(assignment)
            .enumerate()
            .map(|(event_index, (event, &slot_index))| SlotAssignment {
                event: event.as_ref().to_string(),
                slot: slots[slot_index].as_ref().to_string(),
                event_index,
                slot_index,
                cost: costs.get(event_index, slot_index),
            })
            .collect();
        let total_score = assignments.iter().map(|a| a.cost).sum();

        Self {
            assignments,
            total_score,
            strategy,
        }
    }

    /// Number of assigned events.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Ordered (event, slot) label pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|a| (a.event.as_str(), a.slot.as_str()))
    }

    /// Assigned slot label per event, in event order.
    pub fn slot_labels(&self) -> Vec<&str> {
        self.assignments.iter().map(|a| a.slot.as_str()).collect()
    }

    /// Assigned slot index per event, in event order.
    pub fn slot_indices(&self) -> Vec<usize> {
        self.assignments.iter().map(|a| a.slot_index).collect()
    }

    /// Slot assigned to the first event with this label.
    pub fn slot_for(&self, event: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.event == event)
            .map(|a| a.slot.as_str())
    }
}
