//! numerical building blocks shared by every utility formula.

/// upper clamp applied to a utility before exponentiation
pub const MAX_UTILITY: f64 = 80.0;
/// lower clamp applied to a utility before exponentiation
pub const MIN_UTILITY: f64 = -80.0;
/// values below this are treated as zero
pub const EPSILON: f64 = 1e-40;
/// reported in place of a generalized time when a query is unavailable
pub const GENERALIZED_TIME_UNAVAILABLE: f64 = -999.0;

pub fn clamp_utility(utility: f64) -> f64 {
    utility.clamp(MIN_UTILITY, MAX_UTILITY)
}

/// exp of the clamped utility. always finite and positive for finite input.
pub fn exp_utility(utility: f64) -> f64 {
    clamp_utility(utility).exp()
}

/// concave transform `γx + (1-γ)ln(max(x, 1))`. γ = 1 leaves x unchanged.
pub fn gamma_function(x: f64, gamma: f64) -> f64 {
    gamma * x + (1.0 - gamma) * x.max(1.0).ln()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exp_utility_is_finite_and_positive() {
        for u in [-1e9, -81.0, -80.0, 0.0, 80.0, 1e9] {
            let e = exp_utility(u);
            assert!(e.is_finite() && e > 0.0, "exp_utility({u}) = {e}");
            let c = clamp_utility(u);
            assert!((MIN_UTILITY..=MAX_UTILITY).contains(&c));
        }
    }

    #[test]
    fn test_gamma_function() {
        assert_eq!(gamma_function(30.0, 1.0), 30.0);
        assert!((gamma_function(30.0, 0.0) - 30f64.ln()).abs() < 1e-12);
        // values below one contribute nothing through the log term
        assert_eq!(gamma_function(0.5, 0.5), 0.25);
    }
}
