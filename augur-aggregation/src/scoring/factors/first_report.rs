/// First-report adjustment. Neutral (1.0) under the default config.
pub fn multiplier(first_report: bool, configured: f64) -> f64 {
    if first_report {
        configured
    } else {
        1.0
    }
}
