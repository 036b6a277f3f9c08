/// Corroboration-derived reliability: `1 - e^(-k0 * corroborations)`.
///
/// Range: 0.0 – 1.0, strictly increasing in the corroboration count.
/// Negative counts are treated as zero.
pub fn calculate(corroborations_indep: i64, k0: f64) -> f64 {
    let count = corroborations_indep.max(0) as f64;
    1.0 - (-k0 * count).exp()
}
