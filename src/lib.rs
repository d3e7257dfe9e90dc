//! Real-coded genetic algorithm for continuous function minimization.
//!
//! `realga` searches a fixed-length real-valued parameter space with a
//! classic generational GA:
//!
//! - **Tournament selection** (without replacement within a tournament)
//! - **Single-point crossover** producing one offspring per parent pair
//! - **Per-gene Gaussian mutation**, unbounded
//! - **Full generational replacement** — no elitism, the population is
//!   rebuilt wholesale every generation
//!
//! The caller supplies the objective as a cost function over a gene slice;
//! the engine maximizes the negated cost. One injectable, seedable RNG
//! drives every draw, so seeded runs are fully reproducible. Per-generation
//! progress is reported as structured values through an observer callback
//! rather than being printed, leaving the output medium to the caller.
//!
//! # Example
//!
//! ```
//! use realga::{GaConfig, GaRunner};
//!
//! // Minimize the sphere function, f(x) = sum of squares.
//! let sphere = |genes: &[f64]| genes.iter().map(|x| x * x).sum::<f64>();
//!
//! let config = GaConfig::new(4)
//!     .with_population_size(60)
//!     .with_generations(100)
//!     .with_mutation_rate(0.05)
//!     .with_seed(42);
//!
//! let result = GaRunner::run_with_observer(&sphere, &config, |report| {
//!     // e.g. feed a logger or a live plot
//!     let _ = (report.generation, report.best_fitness);
//! })?;
//!
//! assert_eq!(result.population.len(), 60);
//! assert!(result.best_fitness <= 0.0); // fitness is the negated cost
//! # Ok::<(), realga::GaError>(())
//! ```

mod config;
mod error;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use error::{ConfigError, GaError};
pub use runner::{GaResult, GaRunner, GenerationReport};
pub use types::{Individual, Objective, ObjectiveError};
