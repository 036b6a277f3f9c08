/// Augur engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound applied to any probability headed for `logit`.
pub const PROBABILITY_FLOOR: f64 = 1e-6;

/// Upper bound applied to any probability headed for `logit`.
pub const PROBABILITY_CEIL: f64 = 1.0 - PROBABILITY_FLOOR;

/// Neutral prior used when nothing better is known.
pub const UNINFORMATIVE_PRIOR: f64 = 0.5;
