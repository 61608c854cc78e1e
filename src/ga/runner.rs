//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns a population and advances it one generation at
//! a time: selection → crossover → mutation → evaluation → replacement →
//! scaling.

use super::config::{Parameters, Replacement};
use super::error::Error;
use super::operators::{crossover_adjacent, mutate_children};
use super::selection::{sort_descending, truncation};
use super::types::{FitnessFunction, Individual, Initializer};
use crate::random::rng_from;
use rand::rngs::StdRng;
use tracing::instrument;

/// Fitness value at which [`GeneticAlgorithm::generate`] stops early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessTarget {
    /// The fitness to reach.
    pub value: f64,

    /// Maximum absolute distance from `value` that still counts as reached.
    pub tolerance: f64,
}

impl FitnessTarget {
    /// A target that must be hit exactly.
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            tolerance: 0.0,
        }
    }

    /// A target that is reached within `tolerance` of `value`.
    pub fn within(value: f64, tolerance: f64) -> Self {
        Self {
            value,
            tolerance: tolerance.abs(),
        }
    }

    /// Whether `fitness` is close enough to the target.
    pub fn is_reached(&self, fitness: f64) -> bool {
        (fitness - self.value).abs() <= self.tolerance
    }
}

/// Summary of one [`GeneticAlgorithm::generate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Evolution {
    /// Generations executed by this call.
    pub generations: usize,

    /// Whether the run stopped because the fitness target was reached.
    pub target_reached: bool,

    /// Best (scaled) fitness at the end of each executed generation.
    pub fitness_history: Vec<f64>,
}

/// A generational genetic algorithm over chromosomes of `G`.
///
/// Higher fitness is better. The population is kept sorted by descending
/// fitness, so [`best_individual`](Self::best_individual) is always its
/// first element.
///
/// # Usage
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_genalg::ga::{FitnessTarget, GeneticAlgorithm, Parameters};
///
/// let init = |rng: &mut dyn RngCore| -> Vec<u8> {
///     (0..16).map(|_| rng.random_range(0..2)).collect()
/// };
/// let ones = |c: &[u8]| c.iter().filter(|&&g| g == 1).count() as f64;
///
/// let params = Parameters::for_chromosome_length(16)?.with_seed(42);
/// let mut ga = GeneticAlgorithm::with_parameters(50, init, ones, params)?;
///
/// let run = ga.generate(200, Some(FitnessTarget::exact(16.0)))?;
/// assert!(run.generations <= 200);
/// assert_eq!(ga.generation_count(), run.generations);
/// assert!(ga.best_individual().fitness() >= 8.0);
/// # Ok::<(), u_genalg::ga::Error>(())
/// ```
pub struct GeneticAlgorithm<G, I, F> {
    population: Vec<Individual<G>>,
    population_size: usize,
    chromosome_length: usize,
    initializer: I,
    fitness: F,
    parameters: Parameters,
    generation_count: usize,
    rng: StdRng,
}

impl<G, I, F> GeneticAlgorithm<G, I, F>
where
    G: Clone,
    I: Initializer<G>,
    F: FitnessFunction<G>,
{
    /// Builds an engine with default parameters.
    ///
    /// One chromosome is sampled from `initializer` to size the defaults of
    /// [`Parameters::for_chromosome_length`]; that sample is discarded.
    pub fn new(population_size: usize, mut initializer: I, fitness: F) -> Result<Self, Error> {
        let mut rng = rng_from(None);
        let sample = initializer.initialize(&mut rng);
        let parameters = Parameters::for_chromosome_length(sample.len())?;
        Self::build(population_size, initializer, fitness, parameters, rng)
    }

    /// Builds an engine with explicit parameters.
    pub fn with_parameters(
        population_size: usize,
        initializer: I,
        fitness: F,
        parameters: Parameters,
    ) -> Result<Self, Error> {
        let rng = rng_from(parameters.seed);
        Self::build(population_size, initializer, fitness, parameters, rng)
    }

    fn build(
        population_size: usize,
        mut initializer: I,
        fitness: F,
        parameters: Parameters,
        mut rng: StdRng,
    ) -> Result<Self, Error> {
        if population_size < 2 {
            return Err(Error::InvalidPopulationSize(population_size));
        }

        let first = initializer.initialize(&mut rng);
        let chromosome_length = first.len();
        parameters.validate(chromosome_length)?;

        let mut ga = Self {
            population: Vec::with_capacity(population_size),
            population_size,
            chromosome_length,
            initializer,
            fitness,
            parameters,
            generation_count: 0,
            rng,
        };

        let mut first = Individual::new(first);
        first.fitness = ga.fitness.evaluate(&first.chromosome);
        ga.population.push(first);
        while ga.population.len() < population_size {
            let ind = ga.spawn()?;
            ga.population.push(ind);
        }
        sort_descending(&mut ga.population);

        tracing::debug!(
            population_size,
            chromosome_length,
            best_fitness = ga.population[0].fitness,
            "initialized population"
        );
        Ok(ga)
    }

    /// Runs up to `generation_count` generations.
    ///
    /// After each generation, if `target` is given and the best fitness is
    /// within its tolerance, the run stops early.
    ///
    /// # Errors
    /// [`Error::ZeroGenerations`] if `generation_count` is 0. Errors from a
    /// caller strategy breaking its length contract abort the run; the
    /// population of the last completed generation is kept.
    #[instrument(
        level = "debug",
        skip(self),
        fields(population_size = self.population_size, start = self.generation_count)
    )]
    pub fn generate(
        &mut self,
        generation_count: usize,
        target: Option<FitnessTarget>,
    ) -> Result<Evolution, Error> {
        if generation_count == 0 {
            return Err(Error::ZeroGenerations);
        }

        let mut fitness_history = Vec::with_capacity(generation_count);
        for _ in 0..generation_count {
            self.step()?;
            let best = self.best_individual().fitness;
            fitness_history.push(best);

            if let Some(target) = target {
                if target.is_reached(best) {
                    tracing::info!(
                        generation = self.generation_count,
                        best_fitness = best,
                        "fitness target reached"
                    );
                    return Ok(Evolution {
                        generations: fitness_history.len(),
                        target_reached: true,
                        fitness_history,
                    });
                }
            }
        }

        Ok(Evolution {
            generations: fitness_history.len(),
            target_reached: false,
            fitness_history,
        })
    }

    /// Advances the population by one generation.
    fn step(&mut self) -> Result<(), Error> {
        let parent_count = self.parameters.parent_count(self.population_size);
        let parents = truncation(&self.population, parent_count).to_vec();

        let mut children = crossover_adjacent(&parents, self.parameters.crossover_point_index)?;
        let mutated = mutate_children(
            &mut children,
            self.parameters.chromosome_mutation_probability,
            self.parameters.gene_mutation_probability,
            &mut self.initializer,
            &mut self.rng,
        )?;
        for child in children.iter_mut() {
            child.fitness = self.fitness.evaluate(&child.chromosome);
        }

        let mut next = match self.parameters.replacement {
            Replacement::RandomFill => {
                let mut next = Vec::with_capacity(parents.len() + children.len());
                next.extend(parents);
                next.append(&mut children);
                while next.len() < self.population_size {
                    next.push(self.spawn()?);
                }
                next
            }
            Replacement::Survivors => {
                // Parents hold their slots; children compete for the rest.
                let kept = self
                    .population_size
                    .saturating_sub(children.len())
                    .max(parent_count);
                let mut next = self.population[..kept].to_vec();
                sort_descending(&mut children);
                children.truncate(self.population_size - kept);
                next.append(&mut children);
                next
            }
        };
        sort_descending(&mut next);
        next.truncate(self.population_size);
        self.parameters.fitness_scale.apply(&mut next);

        self.population = next;
        self.generation_count += 1;

        tracing::debug!(
            generation = self.generation_count,
            parents = parent_count,
            mutated,
            best_fitness = self.population[0].fitness,
            "generation complete"
        );
        Ok(())
    }

    /// Initializes and evaluates one random individual.
    fn spawn(&mut self) -> Result<Individual<G>, Error> {
        let chromosome = self.initializer.initialize(&mut self.rng);
        if chromosome.len() != self.chromosome_length {
            return Err(Error::ChromosomeLengthMismatch {
                expected: self.chromosome_length,
                actual: chromosome.len(),
            });
        }
        let mut ind = Individual::new(chromosome);
        ind.fitness = self.fitness.evaluate(&ind.chromosome);
        Ok(ind)
    }
}

impl<G, I, F> GeneticAlgorithm<G, I, F> {
    /// The top-ranked individual of the current population.
    pub fn best_individual(&self) -> &Individual<G> {
        &self.population[0]
    }

    /// Number of completed generations.
    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    /// The current population, sorted best first.
    pub fn population(&self) -> &[Individual<G>] {
        &self.population
    }

    /// Configured population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Gene count shared by every chromosome of this run.
    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    /// The evolution parameters in use.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

// ============================================================================
// Tests
// ============================================================================
