//! Numeric helpers shared by the score functions.

/// Squared hyperbolic secant, `4e^(-2x) / (1 + e^(-2x))^2`.
///
/// A bump with maximum 1 at `x = 0`. Evaluated on `|x|` since the
/// function is even, which keeps the exponent non-positive.
#[inline]
pub fn sech2(x: f64) -> f64 {
    let e = (-2.0 * x.abs()).exp();
    4.0 * e / ((1.0 + e) * (1.0 + e))
}

/// `-1` for negative values, `1` otherwise (zero counts as positive).
#[inline]
pub fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Squared log-difference between two mirrored slots, scaled by 5.
///
/// The `+2` softening keeps low-confidence slots from dominating.
#[inline]
pub fn mirror_term(a: f64, b: f64) -> f64 {
    const SOFTNESS: f64 = 2.0;
    let d = (a + SOFTNESS).ln() - (b + SOFTNESS).ln();
    d * d * 5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sech2_peak_and_symmetry() {
        assert!((sech2(0.0) - 1.0).abs() < 1e-12);
        assert!((sech2(1.5) - sech2(-1.5)).abs() < 1e-12);
        assert!(sech2(2.0) < sech2(1.0));
    }

    #[test]
    fn test_sech2_large_arguments_stay_finite() {
        assert_eq!(sech2(1e6), 0.0);
        assert_eq!(sech2(-1e6), 0.0);
    }

    #[test]
    fn test_sech2_matches_closed_form() {
        let x: f64 = 0.7;
        let expected = 1.0 / x.cosh().powi(2);
        assert!((sech2(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sign_zero_is_positive() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn test_mirror_term_zero_for_equal_slots() {
        assert_eq!(mirror_term(4.0, 4.0), 0.0);
        assert!(mirror_term(9.0, 0.0) > 0.0);
    }
}
