//! Run configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for a GA run.
///
/// Immutable once handed to the runner. Parameters are set verbatim by the
/// builder methods; out-of-range values surface as [`ConfigError`] from
/// [`validate`](Self::validate) rather than being silently clamped.
///
/// # Defaults
///
/// ```
/// use realga::GaConfig;
///
/// let config = GaConfig::new(10);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use realga::GaConfig;
///
/// let config = GaConfig::new(10)
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_generations(300)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genes per individual. Must be at least 2 so that a
    /// single-point crossover cut exists.
    pub num_genes: usize,

    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Must be at least `tournament_size`.
    pub population_size: usize,

    /// Per-gene probability of Gaussian mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to run. Zero is valid: the initial population
    /// is returned as-is and no reports are emitted.
    pub generations: usize,

    /// Tournament size for parent selection.
    ///
    /// Higher values mean stronger selection pressure. Sampling is without
    /// replacement, so this cannot exceed `population_size`.
    pub tournament_size: usize,

    /// Range `(min, max)` the initial gene values are drawn from,
    /// uniformly and independently per gene.
    ///
    /// Mutation is unbounded, so evolved genes may leave this range.
    pub init_range: (f64, f64),

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration for `num_genes`-dimensional individuals
    /// with default parameters.
    pub fn new(num_genes: usize) -> Self {
        Self {
            num_genes,
            population_size: 100,
            mutation_rate: 0.01,
            generations: 50,
            tournament_size: 3,
            init_range: (-5.0, 5.0),
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the initial sampling range for gene values.
    pub fn with_init_range(mut self, min: f64, max: f64) -> Self {
        self.init_range = (min, max);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The runner calls this before any evolution begins; invalid
    /// parameters never reach the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_genes < 2 {
            return Err(ConfigError::GenomeTooShort(self.num_genes));
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        let (min, max) = self.init_range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::InvalidInitRange(min, max));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::new(10);
        assert_eq!(config.num_genes, 10);
        assert_eq!(config.population_size, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert_eq!(config.generations, 50);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.init_range, (-5.0, 5.0));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::new(4)
            .with_population_size(200)
            .with_mutation_rate(0.05)
            .with_generations(1000)
            .with_tournament_size(5)
            .with_init_range(-1.0, 1.0)
            .with_seed(42);

        assert_eq!(config.num_genes, 4);
        assert_eq!(config.population_size, 200);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.generations, 1000);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.init_range, (-1.0, 1.0));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::new(10).validate().is_ok());
    }

    #[test]
    fn test_validate_single_gene() {
        let err = GaConfig::new(1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::GenomeTooShort(1)));
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::new(10).with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::new(10).with_tournament_size(0);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::EmptyTournament
        ));
    }

    #[test]
    fn test_validate_tournament_exceeds_population() {
        let config = GaConfig::new(10).with_population_size(2).with_tournament_size(3);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::TournamentTooLarge {
                tournament_size: 3,
                population_size: 2,
            }
        ));
    }

    #[test]
    fn test_validate_tournament_equals_population() {
        let config = GaConfig::new(10).with_population_size(3).with_tournament_size(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(GaConfig::new(10).with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::new(10).with_mutation_rate(1.0).validate().is_ok());
        assert!(GaConfig::new(10).with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::new(10).with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::new(10).with_mutation_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_init_range() {
        assert!(GaConfig::new(10).with_init_range(0.0, 1.0).validate().is_ok());
        assert!(GaConfig::new(10).with_init_range(1.0, 1.0).validate().is_err());
        assert!(GaConfig::new(10).with_init_range(2.0, -2.0).validate().is_err());
        assert!(GaConfig::new(10)
            .with_init_range(f64::NEG_INFINITY, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(GaConfig::new(10).with_generations(0).validate().is_ok());
    }
}
