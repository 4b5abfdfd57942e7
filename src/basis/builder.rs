//! Regression basis (design matrix) construction.
//!
//! The design matrix M connects basis coefficients and fitted values:
//! - M[i,j] = φ_j(x_i) where φ_j is the j-th basis polynomial and x_i is the i-th input
//! - fitted = M * coeffs
//! - coeffs are found by least squares against realized cash flows (done by the caller)

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::basis::{BasisConfig, BasisInput, BasisMatrix, PolynomialFamily};
use crate::error::Result;

/// Builds design matrices for a fixed polynomial family.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasisBuilder {
    config: BasisConfig,
}

impl BasisBuilder {
    /// Create a builder from a config.
    pub fn new(config: BasisConfig) -> Self {
        Self { config }
    }

    /// Create a builder for a family with default settings.
    pub fn for_family(family: PolynomialFamily) -> Self {
        Self::new(BasisConfig::new(family))
    }

    /// Create a builder from a case-insensitive family name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(BasisConfig::from_name(name)?))
    }

    pub fn config(&self) -> &BasisConfig {
        &self.config
    }

    pub fn family(&self) -> PolynomialFamily {
        self.config.family
    }

    /// Evaluate the basis at `x`.
    ///
    /// A scalar gives a vector of length K, a sequence of length N gives an
    /// (N, K) matrix with rows in input order.
    pub fn build<'a>(&self, x: impl Into<BasisInput<'a>>) -> BasisMatrix {
        let input: BasisInput<'a> = x.into();
        let family = self.config.family;
        let values = input.values();
        let n_rows = values.len();
        let n_basis = family.n_basis();

        log::debug!(
            "Building {} basis: {} rows x {} columns",
            family,
            n_rows,
            n_basis
        );

        if family == PolynomialFamily::Laguerre {
            let n_negative = values.iter().filter(|&&x| x < 0.0).count();
            if n_negative > 0 {
                log::warn!(
                    "Laguerre basis evaluated at {} negative input(s); values are outside [0, inf)",
                    n_negative
                );
            }
        }

        // Row-major, prefilled with the constant term
        let mut data = vec![1.0; n_rows * n_basis];
        self.fill_rows(values, &mut data);

        BasisMatrix::from_row_major(&data, n_rows, n_basis, input.is_scalar())
    }

    /// Evaluate Σ_j c_j φ_j at `x` (one value per row).
    pub fn evaluate_expansion<'a>(
        &self,
        x: impl Into<BasisInput<'a>>,
        coeffs: &[f64],
    ) -> Result<Vec<f64>> {
        self.build(x).dot(coeffs)
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_rows(&self, values: &[f64], data: &mut [f64]) {
        let family = self.config.family;
        for (row, &x) in data.chunks_exact_mut(family.n_basis()).zip(values) {
            family.evaluate_row(x, row);
        }
    }

    #[cfg(feature = "parallel")]
    fn fill_rows(&self, values: &[f64], data: &mut [f64]) {
        let family = self.config.family;
        let n_basis = family.n_basis();

        if values.len() < self.config.parallel_threshold {
            for (row, &x) in data.chunks_exact_mut(n_basis).zip(values) {
                family.evaluate_row(x, row);
            }
            return;
        }

        log::trace!("Filling {} rows in parallel", values.len());
        data.par_chunks_exact_mut(n_basis)
            .zip(values.par_iter())
            .for_each(|(row, &x)| family.evaluate_row(x, row));
    }
}

/// Build the basis for `x` using a family given by name.
///
/// Names are matched case-insensitively against `chebychev_firstkind`,
/// `chebychev_secondkind` and `laguerre`. Unknown names fail with
/// [`BasisError::UnrecognizedFamily`](crate::BasisError::UnrecognizedFamily)
/// rather than returning an unfilled matrix.
pub fn build<'a>(x: impl Into<BasisInput<'a>>, family: &str) -> Result<BasisMatrix> {
    Ok(BasisBuilder::from_name(family)?.build(x))
}
