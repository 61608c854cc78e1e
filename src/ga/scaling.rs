//! Fitness scaling.
//!
//! Scaling reshapes the fitness values of a population after replacement,
//! changing how strongly the best individuals dominate the next selection.
//! It runs on a population already sorted best first and does not re-sort.
//!
//! For finite inputs every mode keeps rank order: windowing shifts by a
//! constant, the square root is monotonic on non-negative values, and the
//! linear ladder is assigned by rank. NaN produced by [`FitnessScale::Exponential`]
//! on negative fitness breaks that; the next sort ranks NaN last.

use super::types::Individual;

/// Post-replacement fitness transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessScale {
    /// Fitness values are used as computed.
    #[default]
    Rough,

    /// Zero-based distribution: the worst fitness is subtracted from all.
    Windowing,

    /// Square root of each fitness, reducing the influence of the strongest
    /// individuals.
    ///
    /// Requires non-negative fitness. Negative values become NaN, which is
    /// logged and then propagated.
    Exponential,

    /// Evenly spaced ladder: the individual at rank `r` (0-based, best first)
    /// gets `population.len() - r`.
    Linear,
}

impl FitnessScale {
    /// Applies the scaling to `population` in place.
    ///
    /// `population` must be sorted by descending fitness.
    pub fn apply<G>(&self, population: &mut [Individual<G>]) {
        match self {
            FitnessScale::Rough => {}
            FitnessScale::Windowing => {
                let Some(min) = population.last().map(|ind| ind.fitness) else {
                    return;
                };
                for ind in population.iter_mut() {
                    ind.fitness -= min;
                }
            }
            FitnessScale::Exponential => {
                let negatives = population.iter().filter(|ind| ind.fitness < 0.0).count();
                if negatives > 0 {
                    tracing::warn!(
                        negatives,
                        "exponential scaling applied to negative fitness, results are NaN"
                    );
                }
                for ind in population.iter_mut() {
                    ind.fitness = ind.fitness.sqrt();
                }
            }
            FitnessScale::Linear => {
                let n = population.len();
                for (rank, ind) in population.iter_mut().enumerate() {
                    ind.fitness = (n - rank) as f64;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual<()>> {
        fitnesses
            .iter()
            .map(|&f| Individual {
                chromosome: vec![()],
                fitness: f,
            })
            .collect()
    }

    fn fitnesses(pop: &[Individual<()>]) -> Vec<f64> {
        pop.iter().map(|ind| ind.fitness).collect()
    }

    #[test]
    fn test_rough_is_noop() {
        let mut pop = make_population(&[9.0, 4.0, -1.0]);
        FitnessScale::Rough.apply(&mut pop);
        assert_eq!(fitnesses(&pop), vec![9.0, 4.0, -1.0]);
    }

    #[test]
    fn test_windowing_zero_based() {
        let mut pop = make_population(&[9.0, 4.0, -1.0]);
        FitnessScale::Windowing.apply(&mut pop);
        assert_eq!(fitnesses(&pop), vec![10.0, 5.0, 0.0]);
        let min = fitnesses(&pop).into_iter().fold(f64::INFINITY, f64::min);
        assert_eq!(min, 0.0);
    }

    #[test]
    fn test_exponential_square_root() {
        let mut pop = make_population(&[16.0, 9.0, 2.0, 0.0]);
        FitnessScale::Exponential.apply(&mut pop);
        let scaled = fitnesses(&pop);
        for (s, raw) in scaled.iter().zip([16.0f64, 9.0, 2.0, 0.0]) {
            assert!(*s >= 0.0);
            assert!((s - raw.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_exponential_negative_is_nan() {
        let mut pop = make_population(&[4.0, -4.0]);
        FitnessScale::Exponential.apply(&mut pop);
        assert_eq!(pop[0].fitness, 2.0);
        assert!(pop[1].fitness.is_nan());
    }

    #[test]
    fn test_linear_ladder() {
        let mut pop = make_population(&[100.0, 50.0, 49.0, 3.0, -7.0]);
        FitnessScale::Linear.apply(&mut pop);
        assert_eq!(fitnesses(&pop), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_empty_population() {
        let mut pop = make_population(&[]);
        for scale in [
            FitnessScale::Rough,
            FitnessScale::Windowing,
            FitnessScale::Exponential,
            FitnessScale::Linear,
        ] {
            scale.apply(&mut pop);
        }
        assert!(pop.is_empty());
    }
}
