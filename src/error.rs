//! Error types.

/// Errors raised at the boundary of the optimizer or when a tour
/// stops being a permutation of the point set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TourError {
    #[error("InvalidInput: {reason}")]
    InvalidInput { reason: String },
    #[error("ChromosomeInvariant: {reason}")]
    ChromosomeInvariant { reason: String },
    #[error("InvalidConfig: {reason}")]
    InvalidConfig { reason: String },
}

impl TourError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn chromosome_invariant(reason: impl Into<String>) -> Self {
        Self::ChromosomeInvariant {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;
