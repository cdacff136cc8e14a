//! Strategy selection rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Assignment strategy chosen by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Enumerate every injective assignment. Optimal, exponential.
    Exhaustive,
    /// Hungarian minimum-cost perfect matching. Optimal, O(n³).
    ExactMatching,
    /// Genetic population search. Approximate.
    Genetic,
}

impl Strategy {
    /// Picks a strategy from the problem dimensions alone.
    ///
    /// 1. `num_events <= small_threshold` → [`Strategy::Exhaustive`]
    /// 2. `num_events == num_slots` → [`Strategy::ExactMatching`]
    /// 3. otherwise → [`Strategy::Genetic`]
    ///
    /// # Example
    /// ```
    /// use u_timeslot::scheduler::Strategy;
    ///
    /// assert_eq!(Strategy::select(4, 5, 5), Strategy::Exhaustive);
    /// assert_eq!(Strategy::select(8, 8, 5), Strategy::ExactMatching);
    /// assert_eq!(Strategy::select(10, 7, 5), Strategy::Genetic);
    /// ```
    pub fn select(num_events: usize, num_slots: usize, small_threshold: usize) -> Self {
        if num_events <= small_threshold {
            Self::Exhaustive
        } else if num_events == num_slots {
            Self::ExactMatching
        } else {
            Self::Genetic
        }
    }

    /// Short name (e.g., "exhaustive").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::ExactMatching => "exact-matching",
            Self::Genetic => "genetic",
        }
    }

    /// Whether results are guaranteed optimal.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Genetic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_takes_precedence() {
        assert_eq!(Strategy::select(4, 5, 5), Strategy::Exhaustive);
        assert_eq!(Strategy::select(5, 5, 5), Strategy::Exhaustive);
        assert_eq!(Strategy::select(3, 3, 5), Strategy::Exhaustive);
    }

    #[test]
    fn test_square_above_threshold() {
        assert_eq!(Strategy::select(6, 6, 5), Strategy::ExactMatching);
        assert_eq!(Strategy::select(3, 3, 2), Strategy::ExactMatching);
    }

    #[test]
    fn test_rectangular_above_threshold() {
        assert_eq!(Strategy::select(10, 7, 5), Strategy::Genetic);
        assert_eq!(Strategy::select(6, 12, 5), Strategy::Genetic);
    }

    #[test]
    fn test_zero_threshold_disables_exhaustive() {
        assert_eq!(Strategy::select(1, 1, 0), Strategy::ExactMatching);
        assert_eq!(Strategy::select(1, 2, 0), Strategy::Genetic);
    }

    #[test]
    fn test_names() {
        assert_eq!(Strategy::ExactMatching.to_string(), "exact-matching");
        assert!(Strategy::Exhaustive.is_exact());
        assert!(!Strategy::Genetic.is_exact());
    }
}
