//! # lsmc-basis
//!
//! Polynomial regression bases for least-squares Monte Carlo.
//!
//! This crate provides the design matrices used to regress continuation
//! values in American option pricing:
//! - Polynomial evaluation (Chebyshev first/second kind, Laguerre)
//! - Basis construction from a scalar or a sequence of inputs
//! - Fitted-value evaluation from regression coefficients
//!
//! ```
//! use lsmc_basis::build;
//!
//! let spots = [0.9, 1.0, 1.1];
//! let basis = build(&spots, "laguerre")?;
//! assert_eq!((basis.n_rows(), basis.n_basis()), (3, 5));
//! # Ok::<(), lsmc_basis::BasisError>(())
//! ```

pub mod basis;
pub mod error;
pub mod polynomial;

// Re-export main types for convenience
pub use basis::{
    BasisBuilder, BasisConfig, BasisInput, BasisMatrix, DEFAULT_PARALLEL_THRESHOLD,
    PolynomialFamily, build,
};
pub use error::{BasisError, Result};
pub use polynomial::{chebyshev_t, chebyshev_u, laguerre};
