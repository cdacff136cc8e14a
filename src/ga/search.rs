//! Generational genetic search over slot permutations.
//!
//! # Algorithm
//!
//! 1. Initialize `population_size` uniformly random permutations.
//! 2. For each generation:
//!    - Select a mating pool of the same size by tournament.
//!    - Recombine consecutive pairs with probability `crossover_rate`.
//!    - Mutate each offspring with probability `mutation_rate`.
//!    - Re-evaluate changed offspring.
//!    - Overwrite the worst offspring with the `elite_count` best parents.
//!    - Replace the population with the offspring.
//! 3. Return the fittest individual of the final population.
//!
//! The RNG is always supplied by the caller, so runs with the same seed
//! are reproducible and concurrent runs share no state.
//!
//! # Reference
//! Bäck, Fogel & Michalewicz (2000), "Evolutionary Computation 1", Ch. 7

use rand::Rng;
use tracing::{debug, trace};
use u_metaheur::ga::Selection;

use super::chromosome::SlotPermutation;
use crate::config::GeneticConfig;
use crate::error::{Result, ScheduleError};
use crate::models::CostMatrix;

/// Result of a genetic search run.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    /// Fittest individual of the final population.
    pub best: SlotPermutation,
    /// Generations evolved.
    pub generations: usize,
    /// Fitness evaluations performed.
    pub evaluations: usize,
    /// Best fitness of the initial population followed by each generation.
    pub best_per_generation: Vec<f64>,
}

impl GaOutcome {
    /// Best fitness found.
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness
    }
}

/// Genetic search driven by a validated [`GeneticConfig`].
#[derive(Debug, Clone)]
pub struct GeneticSearch {
    config: GeneticConfig,
}

impl GeneticSearch {
    /// Creates a search, rejecting out-of-range tunables.
    pub fn new(config: GeneticConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Evolves assignments for `costs` using `rng`.
    ///
    /// # Errors
    /// `Optimization` if there are more events than slots, or if the final
    /// individual is not a valid permutation.
    pub fn run<R: Rng>(&self, costs: &CostMatrix, rng: &mut R) -> Result<GaOutcome> {
        let num_events = costs.num_events();
        let num_slots = costs.num_slots();
        if num_events > num_slots {
            return Err(ScheduleError::optimization(format!(
                "genetic search needs at least as many slots as events ({num_events} > {num_slots})"
            )));
        }

        let cfg = &self.config;
        let selection = Selection::Tournament(cfg.tournament_size);
        let mut population: Vec<SlotPermutation> = (0..cfg.population_size)
            .map(|_| {
                let mut ch = SlotPermutation::random(num_slots, rng);
                ch.evaluate(costs);
                ch
            })
            .collect();
        let mut evaluations = population.len();
        let mut best_per_generation = Vec::with_capacity(cfg.generations + 1);
        best_per_generation.push(best_fitness(&population));

        for generation in 1..=cfg.generations {
            let carried = elites(&population, cfg.elite_count);

            let mut offspring: Vec<SlotPermutation> = (0..population.len())
                .map(|_| population[selection.select(&population, rng)].clone())
                .collect();

            for i in (1..offspring.len()).step_by(2) {
                if rng.random_bool(cfg.crossover_rate) {
                    let (head, tail) = offspring.split_at_mut(i);
                    cfg.operators.crossover(&mut head[i - 1], &mut tail[0], rng);
                }
            }

            for ch in offspring.iter_mut() {
                if rng.random_bool(cfg.mutation_rate) {
                    cfg.operators.mutate(ch, cfg.gene_swap_rate, rng);
                }
            }

            for ch in offspring.iter_mut().filter(|ch| ch.needs_evaluation()) {
                ch.evaluate(costs);
                evaluations += 1;
            }

            for elite in carried {
                let worst = worst_index(&offspring);
                offspring[worst] = elite;
            }

            population = offspring;
            let best = best_fitness(&population);
            best_per_generation.push(best);
            trace!(generation, best, "Generation evolved");
        }

        let best = population
            .iter()
            .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
            .cloned()
            .ok_or_else(|| ScheduleError::optimization("population is empty"))?;
        if !best.is_valid(num_slots) {
            return Err(ScheduleError::optimization(
                "genetic search produced an invalid permutation",
            ));
        }

        debug!(
            events = num_events,
            slots = num_slots,
            generations = cfg.generations,
            evaluations,
            best = best.fitness,
            "Genetic search finished"
        );

        Ok(GaOutcome {
            best,
            generations: cfg.generations,
            evaluations,
            best_per_generation,
        })
    }
}

fn best_fitness(population: &[SlotPermutation]) -> f64 {
    population
        .iter()
        .map(|ch| ch.fitness)
        .fold(f64::INFINITY, f64::min)
}

fn worst_index(population: &[SlotPermutation]) -> usize {
    population
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn elites(population: &[SlotPermutation], count: usize) -> Vec<SlotPermutation> {
    if count == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<&SlotPermutation> = population.iter().collect();
    ranked.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
    ranked.into_iter().take(count).cloned().collect()
}
