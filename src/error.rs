//! Error taxonomy for assignment optimization.
//!
//! Every failure surfaces as a [`ScheduleError`]. Nothing is retried
//! internally: re-running an exact strategy is pointless, and re-seeding
//! the genetic search is a caller decision.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Failure of an optimization call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Caller-supplied events, slots, or costs violate preconditions.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// Heuristic tunables are out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// An internal invariant failed during search.
    #[error("optimization failed: {reason}")]
    Optimization { reason: String },
}

impl ScheduleError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn optimization(reason: impl Into<String>) -> Self {
        Self::Optimization {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this by changing the input or config.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Optimization { .. })
    }
}

impl From<ConfigError> for ScheduleError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration {
            reason: err.to_string(),
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let reason = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::InvalidInput { reason }
    }
}
