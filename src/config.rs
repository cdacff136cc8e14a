//! Optimizer configuration.
//!
//! `OptimizerConfig` holds the dispatch threshold and the genetic search
//! tunables. Both deserialize with `#[serde(default)]`, so a partial
//! JSON/TOML document overrides only the fields it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ga::operators::GeneticOperators;

/// Event count at or below which exhaustive search is used.
pub const DEFAULT_SMALL_PROBLEM_THRESHOLD: usize = 5;

/// Top-level optimizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Problems with at most this many events are solved exhaustively.
    pub small_problem_threshold: usize,
    /// Tunables for the genetic search.
    pub genetic: GeneticConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            small_problem_threshold: DEFAULT_SMALL_PROBLEM_THRESHOLD,
            genetic: GeneticConfig::default(),
        }
    }
}

impl OptimizerConfig {
    /// Sets the exhaustive search threshold.
    pub fn with_small_problem_threshold(mut self, threshold: usize) -> Self {
        self.small_problem_threshold = threshold;
        self
    }

    /// Sets the genetic search tunables.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.genetic.validate()
    }
}

/// Genetic search tunables.
///
/// Defaults follow the classic simple evolutionary loop: 200 individuals,
/// 100 generations, crossover 0.7, mutation 0.2, per-gene swap 0.1,
/// tournaments of 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Probability that a pair of offspring is recombined.
    pub crossover_rate: f64,
    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,
    /// Per-position swap probability of shuffle-indexes mutation.
    pub gene_swap_rate: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// Best individuals copied unchanged into the next generation.
    /// Zero gives pure generational replacement.
    pub elite_count: usize,
    /// Crossover and mutation operators.
    pub operators: GeneticOperators,
    /// Seed for the call-local RNG when the caller does not pass one.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.2,
            gene_swap_rate: 0.1,
            tournament_size: 3,
            elite_count: 1,
            operators: GeneticOperators::default(),
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_gene_swap_rate(mut self, rate: f64) -> Self {
        self.gene_swap_rate = rate;
        self
    }

    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.population_size, "population_size")?;
        ensure_positive(self.generations, "generations")?;
        ensure_positive(self.tournament_size, "tournament_size")?;
        ensure_probability(self.crossover_rate, "crossover_rate")?;
        ensure_probability(self.mutation_rate, "mutation_rate")?;
        ensure_probability(self.gene_swap_rate, "gene_swap_rate")?;

        if self.elite_count > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must be a probability in [0.0, 1.0] (got {value})")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[error("elite_count ({elite_count}) exceeds population_size ({population_size})")]
    EliteExceedsPopulation {
        elite_count: usize,
        population_size: usize,
    },
}

fn ensure_positive(value: usize, field: &'static str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositive { field });
    }
    Ok(())
}

fn ensure_probability(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::RateOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::{CrossoverType, MutationType};

    #[test]
    fn test_defaults_are_valid() {
        let config = OptimizerConfig::default();
        assert_eq!(config.small_problem_threshold, 5);
        assert_eq!(config.genetic.population_size, 200);
        assert_eq!(config.genetic.generations, 100);
        assert_eq!(config.genetic.tournament_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_population_rejected() {
        let config = GeneticConfig::default().with_population_size(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "population_size"
            })
        );
    }

    #[test]
    fn test_zero_generations_rejected() {
        let config = GeneticConfig::default().with_generations(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "generations"
            })
        );
    }

    #[test]
    fn test_rates_must_be_probabilities() {
        assert!(GeneticConfig::default()
            .with_crossover_rate(1.5)
            .validate()
            .is_err());
        assert!(GeneticConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(GeneticConfig::default()
            .with_gene_swap_rate(f64::NAN)
            .validate()
            .is_err());
        assert!(GeneticConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_elite_bounded_by_population() {
        let config = GeneticConfig::default()
            .with_population_size(4)
            .with_elite_count(5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EliteExceedsPopulation { .. })
        ));
    }

    #[test]
    fn test_partial_json_override() {
        let json = r#"{ "small_problem_threshold": 3, "genetic": { "generations": 25, "seed": 7 } }"#;
        let config: OptimizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.small_problem_threshold, 3);
        assert_eq!(config.genetic.generations, 25);
        assert_eq!(config.genetic.seed, Some(7));
        assert_eq!(config.genetic.population_size, 200);
        assert_eq!(config.genetic.operators.crossover_type, CrossoverType::PartiallyMatched);
    }

    #[test]
    fn test_operators_from_json() {
        let json = r#"{ "operators": { "crossover_type": "Ordered", "mutation_type": "Invert" } }"#;
        let config: GeneticConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.operators.crossover_type, CrossoverType::Ordered);
        assert_eq!(config.operators.mutation_type, MutationType::Invert);
    }
}
