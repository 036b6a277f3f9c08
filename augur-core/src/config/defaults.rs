// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_CAP_A: f64 = 1.0;
pub const DEFAULT_CAP_B: f64 = 0.6;
pub const DEFAULT_CAP_C: f64 = 0.3;
pub const DEFAULT_CAP_D: f64 = 0.2;
pub const DEFAULT_WEIGHT_VERIFIABILITY: f64 = 0.45;
pub const DEFAULT_WEIGHT_RELIABILITY: f64 = 0.25;
pub const DEFAULT_WEIGHT_CONSISTENCY: f64 = 0.15;
pub const DEFAULT_WEIGHT_RECENCY: f64 = 0.15;
pub const DEFAULT_CORROBORATION_K0: f64 = 1.0;
pub const DEFAULT_RECENCY_HALF_LIFE_DAYS: f64 = 120.0;
pub const DEFAULT_MISSING_RECENCY: f64 = 0.5;
pub const DEFAULT_FIRST_REPORT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_CLAMP_HINTS: bool = true;

// --- Clustering ---
pub const DEFAULT_RHO: f64 = 0.6;

// --- Aggregation ---
pub const DEFAULT_TRIM_FRACTION: f64 = 0.2;

// --- Prior ---
pub const DEFAULT_WILSON_Z: f64 = 1.96;
pub const DEFAULT_PRIOR: f64 = 0.5;

// --- Blending ---
pub const DEFAULT_ALPHA: f64 = 0.1;

// --- Audit ---
pub const DEFAULT_INFLUENCE_THRESHOLD: f64 = 0.10;
