use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Hyperbolic recency factor: `1 / (1 + days / halfLife)`.
///
/// Range: 0.0 – 1.0. Timestamps in the future count as zero days old.
/// Missing or unparseable timestamps return `missing`.
pub fn calculate(
    published_at: Option<&str>,
    now: DateTime<Utc>,
    half_life_days: f64,
    missing: f64,
) -> f64 {
    let Some(published) = published_at.and_then(parse_timestamp) else {
        return missing;
    };

    let days = (now - published).num_seconds().max(0) as f64 / 86400.0;

    1.0 / (1.0 + days / half_life_days)
}

/// Parse the timestamp shapes upstream extraction produces: RFC 3339,
/// naive date-times (taken as UTC), and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
