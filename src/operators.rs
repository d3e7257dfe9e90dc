//! Genetic operators for real-valued genomes.
//!
//! Single-point crossover recombines two parents into one offspring;
//! Gaussian mutation perturbs individual genes in place. Both consume
//! randomness from the caller's RNG handle, in a fixed order, so seeded
//! runs replay exactly.

use crate::types::Individual;
use rand::Rng;
use rand_distr::StandardNormal;

/// Single-point crossover.
///
/// Draws a cut point uniformly from `[1, len - 1]` and returns a new
/// individual taking the first `point` genes from `parent1` and the rest
/// from `parent2`. Neither parent is modified; the offspring starts
/// unevaluated.
///
/// # Panics
/// Panics if the parents differ in length or have fewer than 2 genes
/// (no valid cut point exists). `GaConfig::validate` rejects such
/// configurations before the loop starts.
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Individual {
    let n = parent1.genes().len();
    assert_eq!(n, parent2.genes().len(), "parents must have equal length");
    assert!(n >= 2, "genomes must have at least 2 genes");

    let point = rng.random_range(1..n);
    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&parent1.genes()[..point]);
    genes.extend_from_slice(&parent2.genes()[point..]);
    Individual::new(genes)
}

/// Gaussian mutation, in place.
///
/// Independently for each gene, with probability `mutation_rate`, adds a
/// standard normal sample (mean 0, variance 1) to the gene value. Genes
/// are unbounded: repeated mutation may drift outside the initial
/// sampling range, which is accepted behavior.
///
/// A rate of `0.0` leaves the individual bit-for-bit untouched. If any
/// gene is perturbed, the cached fitness is cleared.
///
/// # Panics
/// Panics if `mutation_rate` is not in `[0, 1]`.
pub fn gaussian_mutation<R: Rng + ?Sized>(
    individual: &mut Individual,
    mutation_rate: f64,
    rng: &mut R,
) {
    let mut perturbed = false;
    for gene in individual.genes_mut() {
        if rng.random_bool(mutation_rate) {
            let step: f64 = rng.sample(StandardNormal);
            *gene += step;
            perturbed = true;
        }
    }
    if perturbed {
        individual.clear_fitness();
    }
}
