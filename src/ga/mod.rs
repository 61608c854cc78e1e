//! Genetic Algorithm engine.
//!
//! A generic, encoding-agnostic generational GA. Callers describe their
//! problem with two strategies, an [`Initializer`] that draws random
//! chromosomes and a [`FitnessFunction`] that scores them; the engine owns
//! everything else.
//!
//! # Generation step
//!
//! 1. **Selection**: the top `max(round(n * parent_proportion), 2)`
//!    individuals become parents (rank truncation)
//! 2. **Crossover**: each pair of rank-adjacent parents yields one child by
//!    single-point crossover
//! 3. **Mutation**: gated per-gene replacement from a fresh random chromosome
//! 4. **Evaluation** of the children
//! 5. **Replacement**: parents + children + random fill (or survivors)
//! 6. **Sort** by descending fitness, then **scaling** ([`FitnessScale`])
//!
//! # Key Types
//!
//! - [`GeneticAlgorithm`]: owns the population and runs generations
//! - [`Parameters`]: evolution tunables with defaults and builders
//! - [`Individual`]: chromosome plus fitness
//! - [`Evolution`]: summary of one [`GeneticAlgorithm::generate`] call
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod runner;
mod scaling;
mod selection;
mod types;

pub use config::{Parameters, Replacement};
pub use error::Error;
pub use runner::{Evolution, FitnessTarget, GeneticAlgorithm};
pub use scaling::FitnessScale;
pub use selection::parent_count;
pub use types::{FitnessFunction, Individual, Initializer};
