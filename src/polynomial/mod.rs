//! Polynomial evaluation.
//!
//! This module provides:
//! - Chebyshev polynomials of the first and second kind
//! - Laguerre polynomials
//!
//! Each family has a three-term recurrence for any degree and an expanded
//! closed form for the low degrees used by the regression basis.

mod chebyshev;
mod laguerre;

pub use chebyshev::{
    CHEBYSHEV_MAX_DEGREE, chebyshev_t, chebyshev_t_closed, chebyshev_u, chebyshev_u_closed,
};
pub use laguerre::{LAGUERRE_MAX_DEGREE, laguerre, laguerre_closed};
