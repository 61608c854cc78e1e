//! Core type definitions for the GA engine.
//!
//! [`Individual`] is the candidate solution stored in the population.
//! [`Initializer`] and [`FitnessFunction`] are the two strategies a caller
//! injects to describe a problem: how to draw a random chromosome and how to
//! score one.

use rand::RngCore;

/// A candidate solution: a chromosome plus its fitness.
///
/// Higher fitness is better (maximization). A freshly built individual has
/// fitness `f64::NEG_INFINITY` until the engine evaluates it.
///
/// The chromosome buffer is owned by the individual. Crossover and mutation
/// build or rewrite buffers of their own; two individuals never share genes.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    pub(crate) chromosome: Vec<G>,
    pub(crate) fitness: f64,
}

impl<G> Individual<G> {
    /// Wraps a chromosome in an unevaluated individual.
    pub fn new(chromosome: Vec<G>) -> Self {
        Self {
            chromosome,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// The genes of this individual.
    pub fn chromosome(&self) -> &[G] {
        &self.chromosome
    }

    /// Consumes the individual, returning its chromosome.
    pub fn into_chromosome(self) -> Vec<G> {
        self.chromosome
    }

    /// The current (possibly scaled) fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of genes in the chromosome.
    pub fn gene_count(&self) -> usize {
        self.chromosome.len()
    }

    /// Whether the fitness function has been applied to this individual.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != f64::NEG_INFINITY
    }
}

/// Produces random chromosomes.
///
/// Called once per individual at construction, once per random fill slot in
/// each generation, and once per mutating child to supply replacement genes.
/// Every chromosome produced within one engine must have the same length.
///
/// The engine passes its own RNG so that seeded runs are reproducible; an
/// implementation is free to ignore it and use its own source.
///
/// Any `FnMut(&mut dyn RngCore) -> Vec<G>` is an initializer:
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_genalg::ga::Initializer;
///
/// let mut init = |rng: &mut dyn RngCore| -> Vec<bool> {
///     (0..8).map(|_| rng.random_bool(0.5)).collect()
/// };
/// let mut rng = rand::rng();
/// assert_eq!(init.initialize(&mut rng).len(), 8);
/// ```
pub trait Initializer<G> {
    /// Returns a new random chromosome.
    fn initialize(&mut self, rng: &mut dyn RngCore) -> Vec<G>;
}

impl<G, F> Initializer<G> for F
where
    F: FnMut(&mut dyn RngCore) -> Vec<G>,
{
    fn initialize(&mut self, rng: &mut dyn RngCore) -> Vec<G> {
        self(rng)
    }
}

/// Scores a chromosome. Higher is better.
///
/// This is the only place the engine consults the caller about quality. It
/// must be total over every chromosome the engine can produce; determinism is
/// the caller's responsibility.
///
/// When [`FitnessScale::Exponential`](super::FitnessScale::Exponential) is
/// used, the function must return non-negative values.
pub trait FitnessFunction<G> {
    /// Computes the fitness of `chromosome`.
    fn evaluate(&self, chromosome: &[G]) -> f64;
}

impl<G, F> FitnessFunction<G> for F
where
    F: Fn(&[G]) -> f64,
{
    fn evaluate(&self, chromosome: &[G]) -> f64 {
        self(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_individual_is_unevaluated() {
        let ind = Individual::new(vec![1u8, 0, 1]);
        assert_eq!(ind.fitness(), f64::NEG_INFINITY);
        assert!(!ind.is_evaluated());
        assert_eq!(ind.gene_count(), 3);
        assert_eq!(ind.into_chromosome(), vec![1, 0, 1]);
    }

    #[test]
    fn test_closure_strategies() {
        let mut counter = 0u32;
        let mut init = |_: &mut dyn RngCore| {
            counter += 1;
            vec![counter; 2]
        };
        let mut rng = create_rng(1);
        assert_eq!(init.initialize(&mut rng), vec![1, 1]);
        assert_eq!(init.initialize(&mut rng), vec![2, 2]);

        let sum = |c: &[u32]| c.iter().sum::<u32>() as f64;
        assert_eq!(sum.evaluate(&[1, 2, 3]), 6.0);
    }

    struct Target(Vec<u8>);

    impl FitnessFunction<u8> for Target {
        fn evaluate(&self, chromosome: &[u8]) -> f64 {
            chromosome
                .iter()
                .zip(&self.0)
                .filter(|(a, b)| a == b)
                .count() as f64
        }
    }

    #[test]
    fn test_struct_fitness_function() {
        let target = Target(vec![1, 2, 3]);
        assert_eq!(target.evaluate(&[1, 0, 3]), 2.0);
    }
}
