//! Input normalization for basis construction.
//!
//! Scalars and sequences share one code path: every input is viewed as a
//! slice of length >= 0, and the scalar flag is carried to the output
//! boundary where the single row is flattened.

/// Evaluation points for a basis build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BasisInput<'a> {
    /// A single value; the result is a flat vector.
    Scalar(f64),
    /// An ordered sequence; the result has one row per value.
    Sequence(&'a [f64]),
}

impl<'a> BasisInput<'a> {
    /// Values as a slice (length 1 for scalars).
    pub fn values(&self) -> &[f64] {
        match self {
            BasisInput::Scalar(x) => std::slice::from_ref(x),
            BasisInput::Sequence(xs) => xs,
        }
    }

    /// Number of design matrix rows.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, BasisInput::Scalar(_))
    }
}

impl From<f64> for BasisInput<'_> {
    fn from(x: f64) -> Self {
        BasisInput::Scalar(x)
    }
}

impl<'a> From<&'a [f64]> for BasisInput<'a> {
    fn from(xs: &'a [f64]) -> Self {
        BasisInput::Sequence(xs)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for BasisInput<'a> {
    fn from(xs: &'a [f64; N]) -> Self {
        BasisInput::Sequence(xs.as_slice())
    }
}

impl<'a> From<&'a Vec<f64>> for BasisInput<'a> {
    fn from(xs: &'a Vec<f64>) -> Self {
        BasisInput::Sequence(xs.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_one_row() {
        let input = BasisInput::from(0.25);
        assert!(input.is_scalar());
        assert_eq!(input.len(), 1);
        assert_eq!(input.values(), &[0.25]);
    }

    #[test]
    fn test_sequence_keeps_order() {
        let xs = vec![3.0, 1.0, 2.0, 1.0];
        let input = BasisInput::from(&xs);
        assert!(!input.is_scalar());
        assert_eq!(input.values(), &[3.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_single_element_sequence_is_not_scalar() {
        let input = BasisInput::from(&[0.5]);
        assert!(!input.is_scalar());
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_empty_sequence() {
        let input = BasisInput::from(&[] as &[f64]);
        assert!(input.is_empty());
    }
}
