//! Polynomial families available as regression bases.

use std::fmt;
use std::str::FromStr;

use crate::error::BasisError;
use crate::polynomial::{chebyshev_t_closed, chebyshev_u_closed, laguerre_closed};

/// Polynomial family used to build a regression basis.
///
/// Each family has a fixed number of basis functions: degrees 0..=5 for
/// both Chebyshev kinds and 0..=4 for Laguerre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolynomialFamily {
    /// Chebyshev polynomials of the first kind, T_0 ..= T_5
    #[default]
    ChebyshevFirstKind,
    /// Chebyshev polynomials of the second kind, U_0 ..= U_5
    ChebyshevSecondKind,
    /// Laguerre polynomials, L_0 ..= L_4
    Laguerre,
}

impl PolynomialFamily {
    /// All supported families.
    pub const ALL: [PolynomialFamily; 3] = [
        PolynomialFamily::ChebyshevFirstKind,
        PolynomialFamily::ChebyshevSecondKind,
        PolynomialFamily::Laguerre,
    ];

    /// Canonical (lowercase) name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PolynomialFamily::ChebyshevFirstKind => "chebychev_firstkind",
            PolynomialFamily::ChebyshevSecondKind => "chebychev_secondkind",
            PolynomialFamily::Laguerre => "laguerre",
        }
    }

    /// Number of basis functions K (columns of the design matrix).
    pub fn n_basis(&self) -> usize {
        match self {
            PolynomialFamily::ChebyshevFirstKind | PolynomialFamily::ChebyshevSecondKind => 6,
            PolynomialFamily::Laguerre => 5,
        }
    }

    /// Highest polynomial degree in the basis.
    pub fn max_degree(&self) -> usize {
        self.n_basis() - 1
    }

    /// Evaluate the degree-`degree` basis polynomial at `x`.
    ///
    /// Returns `None` if `degree > self.max_degree()`.
    pub fn evaluate(&self, degree: usize, x: f64) -> Option<f64> {
        if degree > self.max_degree() {
            return None;
        }
        match self {
            PolynomialFamily::ChebyshevFirstKind => chebyshev_t_closed(degree, x),
            PolynomialFamily::ChebyshevSecondKind => chebyshev_u_closed(degree, x),
            PolynomialFamily::Laguerre => laguerre_closed(degree, x),
        }
    }

    /// Fill one design matrix row with φ_0(x) ..= φ_{K-1}(x).
    ///
    /// `row` must have length `self.n_basis()`.
    pub fn evaluate_row(&self, x: f64, row: &mut [f64]) {
        debug_assert_eq!(row.len(), self.n_basis());

        let x2 = x * x;
        let x3 = x2 * x;
        let x4 = x2 * x2;

        row[0] = 1.0;
        match self {
            PolynomialFamily::ChebyshevFirstKind => {
                row[1] = x;
                row[2] = 2.0 * x2 - 1.0;
                row[3] = 4.0 * x3 - 3.0 * x;
                row[4] = 8.0 * x4 - 8.0 * x2 + 1.0;
                row[5] = 16.0 * x4 * x - 20.0 * x3 + 5.0 * x;
            }
            PolynomialFamily::ChebyshevSecondKind => {
                row[1] = 2.0 * x;
                row[2] = 4.0 * x2 - 1.0;
                row[3] = 8.0 * x3 - 4.0 * x;
                row[4] = 16.0 * x4 - 12.0 * x2 + 1.0;
                row[5] = 32.0 * x4 * x - 32.0 * x3 + 6.0 * x;
            }
            PolynomialFamily::Laguerre => {
                row[1] = -x + 1.0;
                row[2] = (x2 - 4.0 * x + 2.0) / 2.0;
                row[3] = (-x3 + 9.0 * x2 - 18.0 * x + 6.0) / 6.0;
                row[4] = (x4 - 16.0 * x3 + 72.0 * x2 - 96.0 * x + 24.0) / 24.0;
            }
        }
    }
}

impl fmt::Display for PolynomialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolynomialFamily {
    type Err = BasisError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        PolynomialFamily::ALL
            .into_iter()
            .find(|family| family.name() == normalized)
            .ok_or_else(|| BasisError::unrecognized_family(s))
    }
}

impl TryFrom<&str> for PolynomialFamily {
    type Error = BasisError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
