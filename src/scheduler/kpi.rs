//! Schedule quality metrics (KPIs).
//!
//! Summarizes how well a schedule honours the preferences encoded in its
//! cost matrix.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Score | Sum of assigned costs |
//! | Mean Cost | Total score / assigned events |
//! | Best / Worst Cost | Lowest and highest single assigned cost |
//! | Top-Choice Rate | Fraction of events placed at their row minimum |
//! | Regret | Total score minus sum of row minima |

use crate::models::{CostMatrix, Schedule};

/// Schedule preference indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Sum of assigned costs.
    pub total_score: f64,
    /// Mean assigned cost.
    pub mean_cost: f64,
    /// Lowest assigned cost.
    pub best_cost: f64,
    /// Highest assigned cost.
    pub worst_cost: f64,
    /// Events placed in one of their cheapest slots.
    pub top_choice_count: usize,
    /// Fraction of events placed in one of their cheapest slots (0.0..1.0).
    pub top_choice_rate: f64,
    /// Extra cost over every event getting its favourite slot.
    pub regret: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the matrix it was built from.
    pub fn calculate(schedule: &Schedule, costs: &CostMatrix) -> Self {
        let count = schedule.assignment_count();
        if count == 0 {
            return Self {
                total_score: 0.0,
                mean_cost: 0.0,
                best_cost: 0.0,
                worst_cost: 0.0,
                top_choice_count: 0,
                top_choice_rate: 1.0,
                regret: 0.0,
            };
        }

        let mut total = 0.0;
        let mut best = f64::INFINITY;
        let mut worst = f64::NEG_INFINITY;
        let mut top_choice_count = 0;
        let mut ideal = 0.0;

        for a in &schedule.assignments {
            total += a.cost;
            best = best.min(a.cost);
            worst = worst.max(a.cost);

            let favourite = costs.row_minimum(a.event_index);
            ideal += favourite;
            if a.cost <= favourite {
                top_choice_count += 1;
            }
        }

        Self {
            total_score: total,
            mean_cost: total / count as f64,
            best_cost: best,
            worst_cost: worst,
            top_choice_count,
            top_choice_rate: top_choice_count as f64 / count as f64,
            regret: total - ideal,
        }
    }

    /// Whether every event got a slot no worse than `max_cost`.
    pub fn meets_threshold(&self, max_cost: f64) -> bool {
        self.worst_cost <= max_cost
    }
}
