//! Parent selection.
//!
//! The engine uses rank-based truncation: the population is kept sorted by
//! descending fitness, and the top `parent_count` individuals breed. No
//! randomness is involved, so selection pressure is controlled entirely by
//! the parent proportion and the fitness scaling mode.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use super::types::Individual;
use std::cmp::Ordering;

/// Number of parents kept from a population of `population_size`.
///
/// `max(round(population_size * parent_proportion), 2)`, capped at the
/// population size.
pub fn parent_count(population_size: usize, parent_proportion: f64) -> usize {
    let wanted = (population_size as f64 * parent_proportion).round() as usize;
    wanted.max(2).min(population_size)
}

/// Returns the top `count` individuals of a population sorted best first.
///
/// # Panics
/// Panics if `count` exceeds the population length.
pub fn truncation<G>(population: &[Individual<G>], count: usize) -> &[Individual<G>] {
    assert!(
        count <= population.len(),
        "cannot select {count} parents from {} individuals",
        population.len()
    );
    &population[..count]
}

/// Sorts a population by descending fitness.
///
/// The sort is stable: individuals of equal fitness keep their relative
/// order. NaN fitness ranks last.
pub fn sort_descending<G>(population: &mut [Individual<G>]) {
    population.sort_by(|a, b| match (a.fitness.is_nan(), b.fitness.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.fitness.total_cmp(&a.fitness),
    });
}
