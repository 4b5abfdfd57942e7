//! Laguerre polynomial evaluation.
//!
//! Laguerre polynomials L_n(x) are orthogonal on [0, ∞) with weight e^{-x}:
//! ∫_0^∞ L_m(x) L_n(x) e^{-x} dx = δ_{mn}
//!
//! Every L_n satisfies L_n(0) = 1. Outside x >= 0 the values are still
//! well defined but carry no orthogonality meaning.

/// Highest degree with a closed form in this module.
pub const LAGUERRE_MAX_DEGREE: usize = 4;

/// Evaluate L_n(x) using the three-term recurrence.
///
/// L_0(x) = 1
/// L_1(x) = 1 - x
/// (n+1) L_{n+1}(x) = (2n+1-x) L_n(x) - n L_{n-1}(x)
pub fn laguerre(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return 1.0 - x;
    }

    let mut p_prev = 1.0; // L_{k-1}
    let mut p_curr = 1.0 - x; // L_k

    for k in 1..n {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0 - x) * p_curr - kf * p_prev) / (kf + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
    }

    p_curr
}

/// L_n(x) from the expanded monomial form, for n <= 4.
///
/// Returns `None` above [`LAGUERRE_MAX_DEGREE`].
pub fn laguerre_closed(n: usize, x: f64) -> Option<f64> {
    let x2 = x * x;
    let value = match n {
        0 => 1.0,
        1 => -x + 1.0,
        2 => (x2 - 4.0 * x + 2.0) / 2.0,
        3 => (-x2 * x + 9.0 * x2 - 18.0 * x + 6.0) / 6.0,
        4 => (x2 * x2 - 16.0 * x2 * x + 72.0 * x2 - 96.0 * x + 24.0) / 24.0,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laguerre_at_zero() {
        for n in 0..=8 {
            assert!((laguerre(n, 0.0) - 1.0).abs() < 1e-14);
        }
        for n in 0..=LAGUERRE_MAX_DEGREE {
            assert_eq!(laguerre_closed(n, 0.0), Some(1.0));
        }
    }

    #[test]
    fn test_laguerre_values() {
        // L_2(1) = -1/2, L_3(1) = -2/3, L_4(1) = -5/8
        assert!((laguerre(2, 1.0) + 0.5).abs() < 1e-14);
        assert!((laguerre(3, 1.0) + 2.0 / 3.0).abs() < 1e-14);
        assert!((laguerre(4, 1.0) + 0.625).abs() < 1e-14);
    }

    #[test]
    fn test_closed_forms_match_recurrence() {
        for n in 0..=LAGUERRE_MAX_DEGREE {
            for &x in &[-1.5, 0.0, 0.25, 1.0, 2.5, 7.0, 12.0] {
                let closed = laguerre_closed(n, x).unwrap();
                let recur = laguerre(n, x);
                let scale = recur.abs().max(1.0);
                assert!(
                    (closed - recur).abs() < 1e-12 * scale,
                    "L_{} at {}: {} vs {}",
                    n,
                    x,
                    closed,
                    recur
                );
            }
        }
    }

    #[test]
    fn test_closed_form_rejects_high_degree() {
        assert!(laguerre_closed(5, 1.0).is_none());
    }
}
