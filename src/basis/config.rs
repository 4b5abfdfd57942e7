//! Configuration for basis construction.

use crate::basis::PolynomialFamily;
use crate::error::Result;

/// Default row count at which the `parallel` feature switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for a [`BasisBuilder`](crate::basis::BasisBuilder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasisConfig {
    /// Polynomial family
    pub family: PolynomialFamily,
    /// Minimum number of rows filled in parallel (only with `parallel`)
    pub parallel_threshold: usize,
}

impl BasisConfig {
    /// Create a config for the given family with default settings.
    pub fn new(family: PolynomialFamily) -> Self {
        Self {
            family,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a config from a case-insensitive family name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Set the parallel row threshold.
    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }
}

impl Default for BasisConfig {
    fn default() -> Self {
        Self::new(PolynomialFamily::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BasisError;

    #[test]
    fn test_from_name() {
        let config = BasisConfig::from_name("LAGUERRE").unwrap();
        assert_eq!(config.family, PolynomialFamily::Laguerre);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

        assert_eq!(
            BasisConfig::from_name("hermite"),
            Err(BasisError::unrecognized_family("hermite"))
        );
    }

    #[test]
    fn test_with_parallel_threshold() {
        let config = BasisConfig::default().with_parallel_threshold(16);
        assert_eq!(config.family, PolynomialFamily::ChebyshevFirstKind);
        assert_eq!(config.parallel_threshold, 16);
    }
}
