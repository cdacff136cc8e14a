//! Strategy-dispatching assignment optimizer.
//!
//! # Algorithm
//!
//! 1. Validate events, slots, and costs; reject with `InvalidInput`.
//! 2. Select one strategy from the dimensions ([`Strategy::select`]).
//! 3. Run it to completion. There is no fallback between strategies.
//! 4. Check the assignment is injective and map indices back to labels.
//!
//! The optimizer holds only immutable configuration. Each call builds its
//! own RNG (or borrows the caller's), so concurrent calls are independent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::Strategy;
use crate::config::OptimizerConfig;
use crate::error::{Result, ScheduleError};
use crate::ga::GeneticSearch;
use crate::models::{CostMatrix, Schedule, ScheduleProblem};
use crate::solver::{exhaustive, hungarian, Solution};
use crate::validation::validate_input;

/// Assigns events to slots at minimum total cost.
///
/// # Example
///
/// ```
/// use u_timeslot::scheduler::{Optimizer, Strategy};
///
/// let optimizer = Optimizer::new();
/// let schedule = optimizer
///     .optimize(&["A", "B"], &["9:00", "11:00"], &[vec![1.0, 5.0], vec![5.0, 1.0]])
///     .unwrap();
///
/// assert_eq!(schedule.slot_labels(), vec!["9:00", "11:00"]);
/// assert_eq!(schedule.total_score, 2.0);
/// assert_eq!(schedule.strategy, Strategy::Exhaustive);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given configuration.
    ///
    /// # Errors
    /// `InvalidConfiguration` if any tunable is out of range.
    pub fn with_config(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Strategy that would be used for these dimensions.
    pub fn select_strategy(&self, num_events: usize, num_slots: usize) -> Strategy {
        Strategy::select(num_events, num_slots, self.config.small_problem_threshold)
    }

    /// Optimizes with a call-local RNG.
    ///
    /// The RNG is seeded from `genetic.seed` when set, otherwise from the OS.
    pub fn optimize<E, S>(&self, events: &[E], slots: &[S], costs: &[Vec<f64>]) -> Result<Schedule>
    where
        E: AsRef<str>,
        S: AsRef<str>,
    {
        let mut rng = self.call_rng();
        self.optimize_with_rng(events, slots, costs, &mut rng)
    }

    /// Optimizes with a caller-supplied RNG.
    pub fn optimize_with_rng<E, S, R>(
        &self,
        events: &[E],
        slots: &[S],
        costs: &[Vec<f64>],
        rng: &mut R,
    ) -> Result<Schedule>
    where
        E: AsRef<str>,
        S: AsRef<str>,
        R: Rng,
    {
        validate_input(events, slots, costs)?;
        let matrix = CostMatrix::from_rows(costs.to_vec())?;
        let (strategy, solution) = self.solve(&matrix, rng)?;
        Ok(Schedule::from_assignment(
            events,
            slots,
            &matrix,
            &solution.assignment,
            strategy,
        ))
    }

    /// Optimizes a deserialized problem with a call-local RNG.
    pub fn optimize_problem(&self, problem: &ScheduleProblem) -> Result<Schedule> {
        self.optimize(&problem.events, &problem.slots, &problem.costs)
    }

    /// Dispatches on a validated matrix and returns slot indices.
    ///
    /// # Errors
    /// - `InvalidInput` if there are more events than slots
    /// - `InvalidConfiguration` if the genetic tunables are out of range
    /// - `Optimization` if the chosen strategy breaks an invariant
    pub fn solve<R: Rng>(&self, costs: &CostMatrix, rng: &mut R) -> Result<(Strategy, Solution)> {
        let num_events = costs.num_events();
        let num_slots = costs.num_slots();
        if num_events > num_slots {
            return Err(ScheduleError::invalid_input(format!(
                "{num_events} events cannot be placed in {num_slots} distinct slots"
            )));
        }

        let strategy = self.select_strategy(num_events, num_slots);
        debug!(
            events = num_events,
            slots = num_slots,
            strategy = %strategy,
            "Strategy selected"
        );

        let solution = match strategy {
            Strategy::Exhaustive => exhaustive::solve(costs)?,
            Strategy::ExactMatching => hungarian::solve(costs)?,
            Strategy::Genetic => {
                let outcome = GeneticSearch::new(self.config.genetic.clone())?.run(costs, rng)?;
                Solution::evaluate(costs, outcome.best.assignment(num_events).to_vec())
            }
        };

        if solution.assignment.len() != num_events || !solution.is_injective(num_slots) {
            return Err(ScheduleError::optimization(format!(
                "{strategy} returned an assignment that is not one distinct slot per event"
            )));
        }

        debug!(strategy = %strategy, score = solution.score, "Optimization finished");
        Ok((strategy, solution))
    }

    fn call_rng(&self) -> SmallRng {
        match self.config.genetic.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Optimizes with default configuration.
///
/// Shorthand for `Optimizer::new().optimize(events, slots, costs)`.
pub fn optimize<E, S>(events: &[E], slots: &[S], costs: &[Vec<f64>]) -> Result<Schedule>
where
    E: AsRef<str>,
    S: AsRef<str>,
{
    Optimizer::new().optimize(events, slots, costs)
}
