//! Crate-wide error type
//!
//! The simulation core has a narrow failure surface: invalid configuration
//! or construction parameters, and exhaustion of the bounded placement
//! search during initialization. The frame step itself never fails.

use thiserror::Error;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by configuration validation and population initialization
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or construction parameter
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The initializer could not place a particle without overlap within its
    /// attempt budget; the population is too dense for the domain
    #[error(
        "could not place particle {index} after {attempts} attempts: \
         population too dense for the domain"
    )]
    PlacementExhausted {
        /// Index of the particle that failed to place
        index: usize,
        /// Number of candidate positions tried before giving up
        attempts: u32,
    },
}
