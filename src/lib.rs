//! Generic generational genetic algorithm.
//!
//! Evolves a population of caller-defined chromosomes with rank truncation
//! selection, single-point crossover, per-gene mutation and optional fitness
//! scaling. The gene type, the random initializer and the fitness function
//! are all supplied by the caller; see [`ga`] for the engine.
//!
//! ```
//! use rand::{Rng, RngCore};
//! use u_genalg::ga::{FitnessTarget, GeneticAlgorithm};
//!
//! let init = |rng: &mut dyn RngCore| -> Vec<bool> {
//!     (0..10).map(|_| rng.random_bool(0.5)).collect()
//! };
//! let fitness = |c: &[bool]| c.iter().filter(|&&b| b).count() as f64;
//!
//! let mut ga = GeneticAlgorithm::new(30, init, fitness)?;
//! ga.generate(100, Some(FitnessTarget::exact(10.0)))?;
//! println!("best: {:?}", ga.best_individual().chromosome());
//! # Ok::<(), u_genalg::ga::Error>(())
//! ```
//!
//! # Architecture
//!
//! The engine is single-threaded and synchronous. Each
//! [`GeneticAlgorithm`](ga::GeneticAlgorithm) owns its population, its
//! strategies and its RNG; nothing is shared between instances. Progress is
//! reported through `tracing` events; the crate installs no subscriber.

pub mod ga;
mod random;
