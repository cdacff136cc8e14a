//! GA-based assignment search.
//!
//! Approximates the minimum-cost assignment for instances too large for
//! exhaustive search and not square. Quality is statistical: it depends
//! on population size, generation count, and the RNG stream.
//!
//! # Encoding
//!
//! - A chromosome is a permutation of all slot indices. The first
//!   `num_events` genes are the assignment; the rest are unused slots.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! Permutation crossover, invert mutation, and tournament selection are
//! provided by `u_metaheur::ga`.
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
pub mod operators;
mod search;

pub use chromosome::{shuffle_indexes_mutation, SlotPermutation};
pub use search::{GaOutcome, GeneticSearch};
