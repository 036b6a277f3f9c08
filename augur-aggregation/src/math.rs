//! Log-odds helpers shared by every stage of the pipeline.

use augur_core::constants::{PROBABILITY_CEIL, PROBABILITY_FLOOR};

/// Restrict `x` to `[lo, hi]`. NaN passes through unchanged so that callers
/// can detect it instead of silently getting a bound.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Keep a probability strictly inside (0, 1) before it reaches `logit`.
pub fn clamp_probability(p: f64) -> f64 {
    clamp(p, PROBABILITY_FLOOR, PROBABILITY_CEIL)
}

/// `ln(p / (1 - p))`. Defined on the open interval (0, 1) only.
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// `1 / (1 + e^-x)`, evaluated so that neither branch overflows.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Mean after discarding `floor(trim_fraction * n)` values from each tail.
///
/// Falls back to the plain mean when trimming would discard everything.
/// Empty input yields 0.
pub fn trimmed_mean(values: &[f64], trim_fraction: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    trimmed_mean_sorted(&sorted, trim_fraction)
}

/// [`trimmed_mean`] over a slice that is already sorted ascending.
pub fn trimmed_mean_sorted(sorted: &[f64], trim_fraction: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let k = (trim_fraction.max(0.0) * n as f64).floor() as usize;
    let kept = if 2 * k >= n { sorted } else { &sorted[k..n - k] };
    mean(kept)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
