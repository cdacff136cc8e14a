//! Event-to-time-slot assignment for the U-Engine ecosystem.
//!
//! Assigns named events to named slots so that the sum of preference
//! costs (lower = better) is minimal, choosing the algorithm from the
//! problem size.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CostMatrix`, `ScheduleProblem`,
//!   `Schedule`, `SlotAssignment`
//! - **`validation`**: Input integrity checks (shape, label counts, cost values)
//! - **`solver`**: Exact strategies — exhaustive search, Hungarian matching
//! - **`ga`**: Genetic population search over slot permutations
//! - **`scheduler`**: Strategy dispatch (`Optimizer`) and KPIs
//! - **`config`**: Dispatch threshold and genetic tunables
//!
//! # Example
//!
//! ```
//! let schedule = u_timeslot::optimize(
//!     &["A", "B", "C"],
//!     &["9:00", "11:00", "2:00"],
//!     &[vec![2.0, 1.0, 3.0], vec![1.0, 2.0, 3.0], vec![3.0, 3.0, 1.0]],
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.total_score, 3.0);
//! ```
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod validation;

pub use config::{GeneticConfig, OptimizerConfig};
pub use error::{Result, ScheduleError};
pub use models::{CostMatrix, Schedule, ScheduleProblem, SlotAssignment};
pub use scheduler::{optimize, Optimizer, ScheduleKpi, Strategy};
