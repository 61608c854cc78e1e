//! GA configuration.
//!
//! [`Parameters`] holds the tunables of one evolution run; [`Replacement`]
//! picks how each generation's population is rebuilt.

use super::error::Error;
use super::scaling::FitnessScale;
use super::selection;

/// How the next population is assembled after breeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Parents and children are kept; every remaining slot is filled with a
    /// freshly initialized, evaluated individual.
    #[default]
    RandomFill,

    /// The current population is kept minus its worst `children` members,
    /// which are replaced by the children. Parents always survive; when they
    /// leave fewer free slots than there are children, only the best
    /// children are kept.
    Survivors,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// [`for_chromosome_length`](Self::for_chromosome_length) derives the
/// crossover point from the chromosome length and fills in the rest:
///
/// ```
/// use u_genalg::ga::{FitnessScale, Parameters};
///
/// let params = Parameters::for_chromosome_length(10)?;
/// assert_eq!(params.crossover_point_index, 4);
/// assert_eq!(params.fitness_scale, FitnessScale::Rough);
/// assert!((params.parent_proportion - 0.2).abs() < 1e-12);
/// # Ok::<(), u_genalg::ga::Error>(())
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genalg::ga::{FitnessScale, Parameters, Replacement};
///
/// let params = Parameters::new(FitnessScale::Linear, 0.3, 2, 0.5, 0.1)
///     .with_replacement(Replacement::Survivors)
///     .with_seed(42);
/// assert_eq!(params.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Post-replacement transform applied to the population's fitness.
    pub fitness_scale: FitnessScale,

    /// Fraction of the population kept as breeding parents, in (0.0, 1.0].
    ///
    /// At least two parents are kept regardless of this value.
    pub parent_proportion: f64,

    /// Last gene index a child inherits from its first parent.
    ///
    /// Genes `[0..=index]` come from parent A, the rest from parent B.
    /// Must be below `chromosome_length - 1` so both parents contribute.
    pub crossover_point_index: usize,

    /// Probability that a child is considered for mutation at all.
    pub chromosome_mutation_probability: f64,

    /// Probability that each gene of a mutating child is replaced.
    pub gene_mutation_probability: f64,

    /// Population rebuild strategy.
    pub replacement: Replacement,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Parameters {
    /// Builds parameters from the five evolution tunables.
    ///
    /// Values are stored as given; out-of-range values are reported by
    /// [`validate`](Self::validate) when the engine is built.
    pub fn new(
        fitness_scale: FitnessScale,
        parent_proportion: f64,
        crossover_point_index: usize,
        chromosome_mutation_probability: f64,
        gene_mutation_probability: f64,
    ) -> Self {
        Self {
            fitness_scale,
            parent_proportion,
            crossover_point_index,
            chromosome_mutation_probability,
            gene_mutation_probability,
            replacement: Replacement::default(),
            seed: None,
        }
    }

    /// Default parameters for chromosomes of `length` genes.
    ///
    /// The crossover point is half the length, so the index of the last gene
    /// taken from the first parent is `length / 2 - 1`.
    ///
    /// - Scaling: rough, parent proportion: 0.2
    /// - Chromosome and gene mutation probability: 0.3
    pub fn for_chromosome_length(length: usize) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::EmptyChromosome);
        }
        let crossover_point_index = (length / 2)
            .checked_sub(1)
            .ok_or(Error::CrossoverPointOutOfBounds { index: 0, length })?;
        Ok(Self::new(FitnessScale::Rough, 0.2, crossover_point_index, 0.3, 0.3))
    }

    /// Sets the fitness scaling mode.
    pub fn with_fitness_scale(mut self, scale: FitnessScale) -> Self {
        self.fitness_scale = scale;
        self
    }

    /// Sets the parent proportion, clamped to `(0.0, 1.0]`.
    pub fn with_parent_proportion(mut self, proportion: f64) -> Self {
        self.parent_proportion = proportion.clamp(f64::EPSILON, 1.0);
        self
    }

    /// Sets the crossover point index.
    pub fn with_crossover_point_index(mut self, index: usize) -> Self {
        self.crossover_point_index = index;
        self
    }

    /// Sets the chromosome-level mutation probability.
    pub fn with_chromosome_mutation_probability(mut self, p: f64) -> Self {
        self.chromosome_mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_gene_mutation_probability(mut self, p: f64) -> Self {
        self.gene_mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the population rebuild strategy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents selected from a population of `population_size`.
    ///
    /// `max(round(population_size * parent_proportion), 2)`, never more than
    /// the population itself.
    pub fn parent_count(&self, population_size: usize) -> usize {
        selection::parent_count(population_size, self.parent_proportion)
    }

    /// Validates the parameters against a chromosome length.
    pub fn validate(&self, chromosome_length: usize) -> Result<(), Error> {
        if chromosome_length == 0 {
            return Err(Error::EmptyChromosome);
        }
        if self.crossover_point_index + 1 >= chromosome_length {
            return Err(Error::CrossoverPointOutOfBounds {
                index: self.crossover_point_index,
                length: chromosome_length,
            });
        }
        if !(self.parent_proportion > 0.0 && self.parent_proportion <= 1.0) {
            return Err(Error::InvalidParentProportion(self.parent_proportion));
        }
        check_probability(
            "chromosome_mutation_probability",
            self.chromosome_mutation_probability,
        )?;
        check_probability("gene_mutation_probability", self.gene_mutation_probability)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ProbabilityOutOfRange { name, value })
    }
}
