//! Chebyshev polynomial evaluation.
//!
//! First kind T_n(x) are orthogonal on [-1, 1] with weight 1/sqrt(1-x²),
//! second kind U_n(x) with weight sqrt(1-x²). Both satisfy
//! P_{n+1}(x) = 2x P_n(x) - P_{n-1}(x) and differ only in P_1.

/// Highest degree with a closed form in this module.
pub const CHEBYSHEV_MAX_DEGREE: usize = 5;

/// Evaluate T_n(x) using the three-term recurrence.
///
/// T_0(x) = 1
/// T_1(x) = x
/// T_{n+1}(x) = 2x T_n(x) - T_{n-1}(x)
pub fn chebyshev_t(n: usize, x: f64) -> f64 {
    recurrence(n, x, x)
}

/// Evaluate U_n(x) using the three-term recurrence.
///
/// U_0(x) = 1
/// U_1(x) = 2x
/// U_{n+1}(x) = 2x U_n(x) - U_{n-1}(x)
pub fn chebyshev_u(n: usize, x: f64) -> f64 {
    recurrence(n, x, 2.0 * x)
}

fn recurrence(n: usize, x: f64, p1: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }

    let mut p_prev = 1.0;
    let mut p_curr = p1;

    for _ in 1..n {
        let p_next = 2.0 * x * p_curr - p_prev;
        p_prev = p_curr;
        p_curr = p_next;
    }

    p_curr
}

/// T_n(x) from the expanded monomial form, for n <= 5.
///
/// Returns `None` above [`CHEBYSHEV_MAX_DEGREE`].
pub fn chebyshev_t_closed(n: usize, x: f64) -> Option<f64> {
    let x2 = x * x;
    let value = match n {
        0 => 1.0,
        1 => x,
        2 => 2.0 * x2 - 1.0,
        3 => 4.0 * x2 * x - 3.0 * x,
        4 => 8.0 * x2 * x2 - 8.0 * x2 + 1.0,
        5 => 16.0 * x2 * x2 * x - 20.0 * x2 * x + 5.0 * x,
        _ => return None,
    };
    Some(value)
}

/// U_n(x) from the expanded monomial form, for n <= 5.
pub fn chebyshev_u_closed(n: usize, x: f64) -> Option<f64> {
    let x2 = x * x;
    let value = match n {
        0 => 1.0,
        1 => 2.0 * x,
        2 => 4.0 * x2 - 1.0,
        3 => 8.0 * x2 * x - 4.0 * x,
        4 => 16.0 * x2 * x2 - 12.0 * x2 + 1.0,
        5 => 32.0 * x2 * x2 * x - 32.0 * x2 * x + 6.0 * x,
        _ => return None,
    };
    Some(value)
}
