//! Error type for the GA engine.

/// Errors raised when the engine is misconfigured or a caller strategy
/// breaks its contract.
///
/// All variants are precondition violations: they abort construction or the
/// current [`generate`](super::GeneticAlgorithm::generate) call and leave the
/// population as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("population_size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),

    #[error("initializer produced an empty chromosome")]
    EmptyChromosome,

    #[error("crossover_point_index {index} out of bounds for chromosome length {length}")]
    CrossoverPointOutOfBounds { index: usize, length: usize },

    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    ChromosomeLengthMismatch { expected: usize, actual: usize },

    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("parent_proportion must be in (0.0, 1.0], got {0}")]
    InvalidParentProportion(f64),

    #[error("generation count must be at least 1")]
    ZeroGenerations,
}
