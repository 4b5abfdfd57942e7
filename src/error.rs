//! Error types for basis construction.

use thiserror::Error;

/// Errors that can occur while building or applying a regression basis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BasisError {
    /// Family name did not match any supported polynomial family.
    #[error(
        "Unrecognized polynomial family '{name}' (expected one of: chebychev_firstkind, chebychev_secondkind, laguerre)"
    )]
    UnrecognizedFamily { name: String },

    /// Coefficient vector length does not match the number of basis functions.
    #[error("Coefficient count mismatch: expected {expected}, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },
}

impl BasisError {
    /// Create an unrecognized family error.
    pub fn unrecognized_family(name: impl Into<String>) -> Self {
        Self::UnrecognizedFamily { name: name.into() }
    }
}

/// Result alias for basis operations.
pub type Result<T> = std::result::Result<T, BasisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BasisError::unrecognized_family("bogus");
        assert!(err.to_string().contains("'bogus'"));

        let err = BasisError::CoefficientCountMismatch {
            expected: 6,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Coefficient count mismatch: expected 6, got 4"
        );
    }
}
