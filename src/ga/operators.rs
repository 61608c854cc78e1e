//! Generic genetic operators.
//!
//! These operate on chromosomes of any gene type `G: Clone`; the engine
//! never inspects gene values.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: splice two parents after a fixed index
//! - [`crossover_adjacent`]: breed each pair of rank-adjacent parents
//!
//! # Mutation
//!
//! - [`mutate_children`]: gated per-gene replacement from a fresh random
//!   chromosome
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use super::error::Error;
use super::types::{Individual, Initializer};
use rand::{Rng, RngCore};
use tracing::instrument;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at a fixed index.
///
/// The child takes genes `[0..=index]` from `first` and `(index + 1..)` from
/// `second`:
///
/// ```
/// use u_genalg::ga::operators::single_point_crossover;
///
/// let child = single_point_crossover(&[1, 2, 3, 4, 5], &[6, 7, 8, 9, 10], 1)?;
/// assert_eq!(child, vec![1, 2, 8, 9, 10]);
/// # Ok::<(), u_genalg::ga::Error>(())
/// ```
///
/// # Errors
/// [`Error::ChromosomeLengthMismatch`] if the parents differ in length,
/// [`Error::CrossoverPointOutOfBounds`] if `index` is not below
/// `length - 1`.
pub fn single_point_crossover<G: Clone>(
    first: &[G],
    second: &[G],
    index: usize,
) -> Result<Vec<G>, Error> {
    let length = first.len();
    if second.len() != length {
        return Err(Error::ChromosomeLengthMismatch {
            expected: length,
            actual: second.len(),
        });
    }
    if index + 1 >= length {
        return Err(Error::CrossoverPointOutOfBounds { index, length });
    }

    let mut child = Vec::with_capacity(length);
    child.extend_from_slice(&first[..=index]);
    child.extend_from_slice(&second[index + 1..]);
    Ok(child)
}

/// Breeds each parent with the next one in rank order.
///
/// For `parents[i]` and `parents[i + 1]`, `i` in `0..parents.len() - 1`,
/// one child is produced, so `parents.len() - 1` children are returned.
/// Children are unevaluated.
#[instrument(level = "debug", skip(parents), fields(parents = parents.len()))]
pub fn crossover_adjacent<G: Clone>(
    parents: &[Individual<G>],
    index: usize,
) -> Result<Vec<Individual<G>>, Error> {
    parents
        .windows(2)
        .map(|pair| {
            single_point_crossover(&pair[0].chromosome, &pair[1].chromosome, index)
                .map(Individual::new)
        })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Mutates crossover children in place.
///
/// Each child independently passes a chromosome-level gate with probability
/// `chromosome_probability`. A child that passes gets one fresh chromosome
/// from `initializer`; every gene position then flips its own coin and takes
/// the fresh gene with probability `gene_probability`.
///
/// Chromosome length never changes. Returns how many children passed the
/// gate.
///
/// # Errors
/// [`Error::ChromosomeLengthMismatch`] if the initializer returns a
/// chromosome of a different length than the child. Children mutated before
/// the failure keep their new genes.
pub fn mutate_children<G, I>(
    children: &mut [Individual<G>],
    chromosome_probability: f64,
    gene_probability: f64,
    initializer: &mut I,
    rng: &mut dyn RngCore,
) -> Result<usize, Error>
where
    I: Initializer<G> + ?Sized,
{
    let mut mutated = 0;
    for child in children.iter_mut() {
        if rng.random::<f64>() >= chromosome_probability {
            continue;
        }
        let fresh = initializer.initialize(rng);
        if fresh.len() != child.chromosome.len() {
            return Err(Error::ChromosomeLengthMismatch {
                expected: child.chromosome.len(),
                actual: fresh.len(),
            });
        }
        for (gene, replacement) in child.chromosome.iter_mut().zip(fresh) {
            if rng.random::<f64>() < gene_probability {
                *gene = replacement;
            }
        }
        mutated += 1;
    }
    Ok(mutated)
}
