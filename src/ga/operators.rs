//! Configurable genetic operators for slot assignment.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`]. PMX, OX, and invert come from
//! `u_metaheur::ga::operators`; shuffle-indexes mutation is local.
//!
//! # Usage
//!
//! ```
//! use u_timeslot::ga::operators::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::PartiallyMatched);
//! assert_eq!(ops.mutation_type, MutationType::ShuffleIndexes);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use u_metaheur::ga::operators as permutation;

use super::chromosome::{shuffle_indexes_mutation, SlotPermutation};

/// Crossover strategy for permutation chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    /// Partially Matched Crossover (Goldberg & Lingle, 1985).
    PartiallyMatched,
    /// Order Crossover (Davis, 1985).
    Ordered,
}

/// Mutation strategy for permutation chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationType {
    /// Swap each position with a random other one at the gene swap rate.
    ShuffleIndexes,
    /// Reverse a random segment.
    Invert,
}

/// Runtime-selectable genetic operators.
///
/// # Example
///
/// ```
/// use u_timeslot::ga::operators::{GeneticOperators, CrossoverType, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Ordered,
///     mutation_type: MutationType::Invert,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::PartiallyMatched,
            mutation_type: MutationType::ShuffleIndexes,
        }
    }
}

impl GeneticOperators {
    /// Recombines two offspring in place using the configured strategy.
    ///
    /// Parents of different length or with fewer than two genes are left
    /// untouched.
    pub fn crossover<R: Rng>(&self, c1: &mut SlotPermutation, c2: &mut SlotPermutation, rng: &mut R) {
        if c1.genes.len() < 2 || c1.genes.len() != c2.genes.len() {
            return;
        }
        let (g1, g2) = match self.crossover_type {
            CrossoverType::PartiallyMatched => permutation::pmx_crossover(&c1.genes, &c2.genes, rng),
            CrossoverType::Ordered => permutation::order_crossover(&c1.genes, &c2.genes, rng),
        };
        *c1 = SlotPermutation::from_genes(g1);
        *c2 = SlotPermutation::from_genes(g2);
    }

    /// Mutates an offspring in place using the configured strategy.
    ///
    /// `gene_swap_rate` only applies to shuffle-indexes mutation.
    pub fn mutate<R: Rng>(&self, chromosome: &mut SlotPermutation, gene_swap_rate: f64, rng: &mut R) {
        match self.mutation_type {
            MutationType::ShuffleIndexes => shuffle_indexes_mutation(chromosome, gene_swap_rate, rng),
            MutationType::Invert => {
                permutation::invert_mutation(&mut chromosome.genes, rng);
                chromosome.reset_fitness();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ordered_invert() -> GeneticOperators {
        GeneticOperators {
            crossover_type: CrossoverType::Ordered,
            mutation_type: MutationType::Invert,
        }
    }

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_type, CrossoverType::PartiallyMatched);
        assert_eq!(ops.mutation_type, MutationType::ShuffleIndexes);
    }

    #[test]
    fn test_pmx_keeps_permutations() {
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut c1 = SlotPermutation::random(9, &mut rng);
            let mut c2 = SlotPermutation::random(9, &mut rng);
            ops.crossover(&mut c1, &mut c2, &mut rng);
            assert!(c1.is_valid(9));
            assert!(c2.is_valid(9));
            assert!(c1.needs_evaluation());
        }
    }

    #[test]
    fn test_pmx_identical_parents() {
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut c1 = SlotPermutation::from_genes(vec![3, 1, 0, 2]);
        let mut c2 = c1.clone();
        ops.crossover(&mut c1, &mut c2, &mut rng);
        assert_eq!(c1.genes, vec![3, 1, 0, 2]);
        assert_eq!(c2.genes, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_ox_keeps_permutations() {
        let ops = ordered_invert();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut c1 = SlotPermutation::random(9, &mut rng);
            let mut c2 = SlotPermutation::random(9, &mut rng);
            ops.crossover(&mut c1, &mut c2, &mut rng);
            assert!(c1.is_valid(9));
            assert!(c2.is_valid(9));
        }
    }

    #[test]
    fn test_crossover_skips_short_or_mismatched() {
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(1);

        let mut c1 = SlotPermutation::from_genes(vec![0]);
        let mut c2 = SlotPermutation::from_genes(vec![0]);
        ops.crossover(&mut c1, &mut c2, &mut rng);
        assert_eq!(c1.genes, vec![0]);

        let mut c1 = SlotPermutation::from_genes(vec![1, 0]);
        let mut c2 = SlotPermutation::from_genes(vec![2, 0, 1]);
        ops.crossover(&mut c1, &mut c2, &mut rng);
        assert_eq!(c1.genes, vec![1, 0]);
        assert_eq!(c2.genes, vec![2, 0, 1]);
    }

    #[test]
    fn test_mutation_invert() {
        let ops = ordered_invert();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut ch = SlotPermutation::random(7, &mut rng);
            ch.fitness = 3.0;
            ops.mutate(&mut ch, 0.0, &mut rng);
            assert!(ch.is_valid(7));
            assert!(ch.needs_evaluation());
        }
    }

    #[test]
    fn test_mutation_shuffle_indexes() {
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SlotPermutation::random(7, &mut rng);
        ops.mutate(&mut ch, 1.0, &mut rng);
        assert!(ch.is_valid(7));
    }
}
