//! Slot permutation chromosome.
//!
//! # Encoding
//!
//! A chromosome is a permutation of all slot indices `0..num_slots`.
//! Position `i` holds the slot of event `i`; positions past the event
//! count are unused slots. Since every gene is distinct, any decoded
//! assignment is injective.
//!
//! # Reference
//! Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use rand::seq::SliceRandom;
use rand::Rng;
use u_metaheur::ga::Individual;

use crate::models::CostMatrix;

/// Permutation chromosome for slot assignment.
///
/// Lower fitness = better assignment (minimization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPermutation {
    /// Slot index per position.
    pub genes: Vec<usize>,
    /// Fitness value (lower = better). `INFINITY` until evaluated.
    pub fitness: f64,
}

impl Individual for SlotPermutation {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl SlotPermutation {
    /// Creates a uniformly random permutation of `0..num_slots`.
    pub fn random<R: Rng>(num_slots: usize, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..num_slots).collect();
        genes.shuffle(rng);
        Self::from_genes(genes)
    }

    /// Wraps existing genes; fitness starts unevaluated.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Whether the fitness is stale.
    #[inline]
    pub fn needs_evaluation(&self) -> bool {
        self.fitness.is_infinite()
    }

    /// Scores the first `num_events` genes and caches the result.
    pub fn evaluate(&mut self, costs: &CostMatrix) -> f64 {
        self.fitness = costs.score(&self.genes);
        self.fitness
    }

    /// The slot per event (first `num_events` genes).
    pub fn assignment(&self, num_events: usize) -> &[usize] {
        &self.genes[..num_events.min(self.genes.len())]
    }

    /// Whether the genes are a permutation of `0..num_slots`.
    pub fn is_valid(&self, num_slots: usize) -> bool {
        if self.genes.len() != num_slots {
            return false;
        }
        let mut seen = vec![false; num_slots];
        self.genes
            .iter()
            .all(|&g| g < num_slots && !std::mem::replace(&mut seen[g], true))
    }

    pub(crate) fn reset_fitness(&mut self) {
        self.fitness = f64::INFINITY;
    }
}

/// Shuffle-indexes mutation: each position swaps with a random other
/// position with probability `gene_swap_rate`.
pub fn shuffle_indexes_mutation<R: Rng>(
    chromosome: &mut SlotPermutation,
    gene_swap_rate: f64,
    rng: &mut R,
) {
    let len = chromosome.genes.len();
    if len < 2 {
        return;
    }
    for i in 0..len {
        if rng.random_bool(gene_swap_rate) {
            let mut j = rng.random_range(0..len - 1);
            if j >= i {
                j += 1;
            }
            chromosome.genes.swap(i, j);
        }
    }
    chromosome.reset_fitness();
}
