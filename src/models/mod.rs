//! Assignment domain models.
//!
//! Provides the data types for representing event-to-slot assignment
//! problems and their solutions.
//!
//! # Domain Mappings
//!
//! | u-timeslot | Calendar | Classroom | Interviews |
//! |------------|----------|-----------|------------|
//! | Event | Meeting | Course | Candidate |
//! | Slot | Time of day | Period | Interview window |
//! | Cost | Preference rating | Conflict penalty | Availability score |

mod cost_matrix;
mod problem;
mod schedule;

pub use cost_matrix::CostMatrix;
pub use problem::ScheduleProblem;
pub use schedule::{Schedule, SlotAssignment};
