//! Regression basis construction.
//!
//! This module provides design matrices for least-squares regression:
//! - Polynomial family selection (Chebyshev first/second kind, Laguerre)
//! - Scalar and sequence inputs sharing one evaluation path
//! - Fitted-value evaluation from regression coefficients

mod builder;
mod config;
mod family;
mod input;
mod matrix;

pub use builder::{BasisBuilder, build};
pub use config::{BasisConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use family::PolynomialFamily;
pub use input::BasisInput;
pub use matrix::BasisMatrix;
