//! Parent selection.
//!
//! Tournament selection is the only strategy here: it keeps selection
//! pressure consistent regardless of the fitness scale, which matters when
//! the objective is negated into fitness and may be arbitrarily shifted.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: sample `k` distinct individuals, return the index
/// of the fittest.
///
/// The tournament is drawn uniformly **without replacement**, so `k` equal
/// to the population size always yields the global best. Successive calls
/// are independent; the same individual may win several tournaments within
/// one generation. The population itself is never modified.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty or `k` is zero or exceeds the
/// population size. The runner rules these out up front via
/// `GaConfig::validate`.
pub fn tournament<R: Rng + ?Sized>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert!(
        k >= 1 && k <= population.len(),
        "tournament size must be in 1..=population size"
    );

    index::sample(rng, population.len(), k)
        .into_iter()
        .max_by(|&a, &b| {
            population[a]
                .fitness()
                .partial_cmp(&population[b].fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("tournament sample is non-empty")
}
