//! Base-rate prior from a reference class.
//!
//! Uses the midpoint of the Wilson score interval, which shrinks small-sample
//! rates toward 0.5: 0 successes in 3 trials gives ≈0.28, not 0.

use augur_core::constants::UNINFORMATIVE_PRIOR;

use crate::math::clamp_probability;

/// Prior probability for `successes` out of `trials`, at confidence `z`.
///
/// `trials <= 0` returns 0.5. Successes are clamped to `[0, trials]`, and the
/// result is kept strictly inside (0, 1).
pub fn prior_from_reference_class(trials: i64, successes: i64, z: f64) -> f64 {
    match wilson_interval(trials, successes, z) {
        Some((lower, upper)) => clamp_probability((lower + upper) / 2.0),
        None => UNINFORMATIVE_PRIOR,
    }
}

/// Wilson score interval `(lower, upper)`, or `None` when there are no trials.
pub fn wilson_interval(trials: i64, successes: i64, z: f64) -> Option<(f64, f64)> {
    if trials <= 0 {
        return None;
    }
    let n = trials as f64;
    let p_hat = successes.clamp(0, trials) as f64 / n;
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let centre = (p_hat + z2 / (2.0 * n)) / denom;
    let half_width = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    Some((centre - half_width, centre + half_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trials_is_uninformative() {
        assert_eq!(prior_from_reference_class(0, 0, 1.96), 0.5);
        assert_eq!(prior_from_reference_class(-4, 2, 1.96), 0.5);
    }

    #[test]
    fn zero_of_three_shrinks_toward_half() {
        let p = prior_from_reference_class(3, 0, 1.96);
        assert!((p - 0.280_75).abs() < 1e-4, "got {p}");
    }

    #[test]
    fn interval_brackets_midpoint() {
        let (lo, hi) = wilson_interval(20, 7, 1.96).unwrap();
        let mid = prior_from_reference_class(20, 7, 1.96);
        assert!(lo < mid && mid < hi);
    }
}
