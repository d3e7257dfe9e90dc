//! Evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete generational process:
//! initialization → evaluation → selection → crossover → mutation →
//! wholesale replacement, emitting a [`GenerationReport`] after each
//! generation.
//!
//! # Randomness
//!
//! Every stochastic draw flows through one RNG, consumed in a fixed order:
//! population initialization gene by gene, then per offspring the two
//! parent tournaments, the crossover point, and the per-gene mutation
//! trials. Two runs with the same seed and configuration therefore produce
//! identical report sequences and final populations.

use crate::config::GaConfig;
use crate::error::GaError;
use crate::operators::{gaussian_mutation, single_point_crossover};
use crate::selection::tournament;
use crate::types::{Individual, Objective};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Best-of-generation snapshot, emitted after each replacement.
///
/// Covers only the generation just built; with no elitism the reported
/// fitness is not guaranteed to improve monotonically across generations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,

    /// Fitness of the best individual of this generation (negated cost).
    pub best_fitness: f64,

    /// The best individual of this generation.
    pub best: Individual,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual seen across the entire run, initial population
    /// included.
    pub best: Individual,

    /// Fitness of `best` (same as `best.fitness()`).
    pub best_fitness: f64,

    /// The final population.
    pub population: Vec<Individual>,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each generation, in order. Empty when the run had
    /// zero generations.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use realga::{GaConfig, GaRunner};
///
/// let sphere = |genes: &[f64]| genes.iter().map(|x| x * x).sum::<f64>();
/// let config = GaConfig::new(4).with_generations(20).with_seed(42);
/// let result = GaRunner::run(&sphere, &config)?;
/// assert_eq!(result.population.len(), 100);
/// # Ok::<(), realga::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization without an observer.
    pub fn run<O: Objective>(objective: &O, config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_observer(objective, config, |_| {})
    }

    /// Runs the optimization, invoking `observer` with a
    /// [`GenerationReport`] after every generational replacement.
    ///
    /// Fails fast with [`GaError::Config`] on an invalid configuration,
    /// before any evolution; an objective failure surfaces as
    /// [`GaError::Evaluation`] and terminates the run immediately.
    pub fn run_with_observer<O, F>(
        objective: &O,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, GaError>
    where
        O: Objective,
        F: FnMut(&GenerationReport),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Initialize: genes drawn uniformly from init_range.
        let (min, max) = config.init_range;
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| {
                let genes = (0..config.num_genes)
                    .map(|_| rng.random_range(min..max))
                    .collect();
                Individual::new(genes)
            })
            .collect();

        evaluate_population(objective, &mut population)?;

        // 2. Track the best-ever individual, starting from the initial
        //    population (which is never reported on its own).
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.generations);

        // 3. Generational loop: build a full offspring population, then
        //    replace the old one wholesale.
        for generation in 0..config.generations {
            let mut next_gen = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);
                let mut child =
                    single_point_crossover(&population[p1], &population[p2], &mut rng);
                gaussian_mutation(&mut child, config.mutation_rate, &mut rng);
                next_gen.push(child);
            }

            evaluate_population(objective, &mut next_gen)?;
            population = next_gen;

            let generation_best = find_best(&population).clone();
            if generation_best.fitness() > best.fitness() {
                best = generation_best.clone();
            }

            let report = GenerationReport {
                generation,
                best_fitness: generation_best.fitness(),
                best: generation_best,
            };
            fitness_history.push(report.best_fitness);
            observer(&report);
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            population,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Evaluate every individual once, caching the negated cost as fitness.
fn evaluate_population<O: Objective>(
    objective: &O,
    population: &mut [Individual],
) -> Result<(), GaError> {
    for ind in population.iter_mut() {
        let cost = objective.cost(ind.genes()).map_err(GaError::Evaluation)?;
        ind.set_fitness(-cost);
    }
    Ok(())
}

/// The individual with the highest fitness.
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
