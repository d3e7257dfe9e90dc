//! Error types.
//!
//! Two kinds of failure exist: invalid configuration, rejected eagerly
//! before any evolution begins, and a failing objective function, which
//! terminates the run immediately. Randomness-driven variability between
//! unseeded runs is normal operation, not an error.

use crate::types::ObjectiveError;

/// Invalid run configuration.
///
/// Returned by [`GaConfig::validate`](crate::GaConfig::validate) and by
/// [`GaRunner::run`](crate::GaRunner::run) before any evolution starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Single-point crossover needs at least two genes to have a valid
    /// cut point.
    #[error("num_genes must be at least 2 for single-point crossover, got {0}")]
    GenomeTooShort(usize),

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("tournament_size must be at least 1")]
    EmptyTournament,

    /// Tournaments sample without replacement, so they cannot be larger
    /// than the population.
    #[error("tournament_size ({tournament_size}) must not exceed population_size ({population_size})")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("mutation_rate must be in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("init_range must be a finite interval with min < max, got ({0}, {1})")]
    InvalidInitRange(f64, f64),
}

/// Failure of a GA run.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The caller's objective function failed. The run stops at the first
    /// failure; no retries, no substituted values.
    #[error("objective evaluation failed: {0}")]
    Evaluation(#[source] ObjectiveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::GenomeTooShort(1).to_string(),
            "num_genes must be at least 2 for single-point crossover, got 1"
        );
        assert_eq!(
            ConfigError::TournamentTooLarge {
                tournament_size: 5,
                population_size: 3,
            }
            .to_string(),
            "tournament_size (5) must not exceed population_size (3)"
        );
    }

    #[test]
    fn test_evaluation_error_keeps_source() {
        let err = GaError::Evaluation("sensor offline".into());
        assert!(err.to_string().contains("sensor offline"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
