//! Design matrix produced by basis construction.
//!
//! - M[i,j] = φ_j(x_i) where φ_j is the degree-j basis polynomial
//! - Column 0 is the constant term, M[i,0] = 1
//! - Scalar input flattens the single row to a vector of length K

use faer::{Col, Mat};

use crate::error::{BasisError, Result};

/// Basis evaluations: a flat vector for scalar input, a matrix otherwise.
#[derive(Clone, Debug)]
pub enum BasisMatrix {
    /// φ_j(x) for j = 0..K, from a scalar input
    Vector(Col<f64>),
    /// M[i,j] = φ_j(x_i), one row per input value
    Matrix(Mat<f64>),
}

impl BasisMatrix {
    /// Assemble from a row-major buffer of `n_rows * n_basis` values.
    pub(crate) fn from_row_major(
        data: &[f64],
        n_rows: usize,
        n_basis: usize,
        scalar: bool,
    ) -> Self {
        debug_assert_eq!(data.len(), n_rows * n_basis);

        if scalar {
            debug_assert_eq!(n_rows, 1);
            BasisMatrix::Vector(Col::from_fn(n_basis, |j| data[j]))
        } else {
            BasisMatrix::Matrix(Mat::from_fn(n_rows, n_basis, |i, j| data[i * n_basis + j]))
        }
    }

    /// True if built from a scalar input.
    pub fn is_vector(&self) -> bool {
        matches!(self, BasisMatrix::Vector(_))
    }

    /// Number of observations (1 for a vector).
    pub fn n_rows(&self) -> usize {
        match self {
            BasisMatrix::Vector(_) => 1,
            BasisMatrix::Matrix(m) => m.nrows(),
        }
    }

    /// Number of basis functions K.
    pub fn n_basis(&self) -> usize {
        match self {
            BasisMatrix::Vector(v) => v.nrows(),
            BasisMatrix::Matrix(m) => m.ncols(),
        }
    }

    /// Value of basis function `j` at observation `i`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self {
            BasisMatrix::Vector(v) => {
                assert_eq!(i, 0, "Vector basis has a single row");
                v[j]
            }
            BasisMatrix::Matrix(m) => m[(i, j)],
        }
    }

    /// Row `i` as an owned vector of length K.
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.n_basis()).map(|j| self.get(i, j)).collect()
    }

    /// Column `j` (basis function j at every observation).
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n_rows()).map(|i| self.get(i, j)).collect()
    }

    /// All rows in input order.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows()).map(|i| self.row(i)).collect()
    }

    /// The vector form, if built from a scalar.
    pub fn as_vector(&self) -> Option<&Col<f64>> {
        match self {
            BasisMatrix::Vector(v) => Some(v),
            BasisMatrix::Matrix(_) => None,
        }
    }

    /// The matrix form, if built from a sequence.
    pub fn as_matrix(&self) -> Option<&Mat<f64>> {
        match self {
            BasisMatrix::Vector(_) => None,
            BasisMatrix::Matrix(m) => Some(m),
        }
    }

    /// Convert to an (N, K) matrix; a vector becomes a single row.
    pub fn into_mat(self) -> Mat<f64> {
        match self {
            BasisMatrix::Vector(v) => Mat::from_fn(1, v.nrows(), |_, j| v[j]),
            BasisMatrix::Matrix(m) => m,
        }
    }

    /// Evaluate the expansion Σ_j c_j φ_j(x_i) for every observation.
    ///
    /// With least-squares coefficients from a continuation value regression
    /// this gives the fitted continuation value at each input.
    pub fn dot(&self, coeffs: &[f64]) -> Result<Vec<f64>> {
        let k = self.n_basis();
        if coeffs.len() != k {
            return Err(BasisError::CoefficientCountMismatch {
                expected: k,
                actual: coeffs.len(),
            });
        }

        let values = (0..self.n_rows())
            .map(|i| (0..k).map(|j| coeffs[j] * self.get(i, j)).sum())
            .collect();
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_major_matrix() {
        let data = [1.0, 2.0, 3.0, 1.0, 5.0, 6.0];
        let m = BasisMatrix::from_row_major(&data, 2, 3, false);

        assert!(!m.is_vector());
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_basis(), 3);
        assert_eq!(m.row(1), vec![1.0, 5.0, 6.0]);
        assert_eq!(m.column(1), vec![2.0, 5.0]);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![1.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_from_row_major_vector() {
        let data = [1.0, 0.5, -0.5];
        let v = BasisMatrix::from_row_major(&data, 1, 3, true);

        assert!(v.is_vector());
        assert_eq!(v.n_rows(), 1);
        assert_eq!(v.n_basis(), 3);
        assert!(v.as_matrix().is_none());
        assert_eq!(v.as_vector().map(|c| c.nrows()), Some(3));

        let m = v.into_mat();
        assert_eq!((m.nrows(), m.ncols()), (1, 3));
        assert_eq!(m[(0, 2)], -0.5);
    }

    #[test]
    fn test_dot() {
        let data = [1.0, 2.0, 1.0, -1.0];
        let m = BasisMatrix::from_row_major(&data, 2, 2, false);

        let fitted = m.dot(&[0.5, 2.0]).unwrap();
        assert!((fitted[0] - 4.5).abs() < 1e-14);
        assert!((fitted[1] + 1.5).abs() < 1e-14);
    }

    #[test]
    fn test_dot_wrong_length() {
        let data = [1.0, 2.0, 3.0];
        let v = BasisMatrix::from_row_major(&data, 1, 3, true);

        assert_eq!(
            v.dot(&[1.0, 2.0]),
            Err(BasisError::CoefficientCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
