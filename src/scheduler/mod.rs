//! Strategy dispatch, optimization entry points, and KPI evaluation.
//!
//! # Dispatch
//!
//! [`Optimizer`] inspects the problem dimensions once and runs exactly
//! one strategy:
//!
//! | Condition | Strategy | Guarantee |
//! |-----------|----------|-----------|
//! | events ≤ threshold (5) | Exhaustive | Optimal |
//! | events = slots | Hungarian matching | Optimal |
//! | otherwise | Genetic search | Approximate |
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarizes preference satisfaction: mean and worst
//! cost, top-choice rate, and regret.
//!
//! # References
//!
//! - Burkard, Dell'Amico & Martello (2012), "Assignment Problems", Ch. 4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod kpi;
mod optimizer;
mod strategy;

pub use kpi::ScheduleKpi;
pub use optimizer::{optimize, Optimizer};
pub use strategy::Strategy;
