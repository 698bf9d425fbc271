//! Error types for the differential evolution engine.
//!
//! Configuration mistakes (inverted interval bounds, duplicate strategy
//! names) and bounds violations (indexed access past the end of a solution,
//! population or domain) are reported through [`DEError`]. Precondition
//! violations such as querying the bound problem before `setup` succeeded
//! are programmer errors and panic instead.

use thiserror::Error;

/// Errors that can occur while configuring or querying the engine.
#[derive(Debug, Error)]
pub enum DEError {
    /// An interval mutation would invert the bounds.
    #[error("invalid bounds: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// The offending lower bound.
        lower: f64,
        /// The offending upper bound.
        upper: f64,
    },

    /// Checked indexed access beyond the end of a container.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the indexed container.
        len: usize,
    },

    /// A strategy prototype with the same name is already registered
    /// within the family.
    #[error("duplicate {family} strategy name: {name}")]
    DuplicateStrategyName {
        /// The strategy family the registration targeted.
        family: String,
        /// The name that was already taken.
        name: String,
    },
}

/// A specialized `Result` type for engine operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` if this is a configuration error.
    ///
    /// This includes `InvalidBounds` and `DuplicateStrategyName` variants.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DEError::InvalidBounds { .. } | DEError::DuplicateStrategyName { .. }
        )
    }

    /// Returns `true` if this is a bounds error, i.e. an indexed access
    /// beyond the end of a solution, population or domain.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, DEError::OutOfRange { .. })
    }
}
