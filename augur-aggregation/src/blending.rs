//! Market blending in log-odds space.

use augur_core::config::BlendMode;
use augur_core::errors::{AugurError, AugurResult};

use crate::math::{clamp, clamp_probability, logit, sigmoid};

/// Blend the neutral posterior with a market-implied probability using the
/// default [`BlendMode::Pooled`] rule.
///
/// The literal blending contract is the additive rule
/// `logit(pAware) = logit(pNeutral) + alpha * logit(market)`, available as
/// [`BlendMode::Additive`]. Pooled interpolates instead:
/// `(1 - alpha) * logit(pNeutral) + alpha * logit(market)`. The two agree at
/// `alpha = 0` and diverge everywhere else. Under Pooled a market equal to
/// `pNeutral` leaves it unchanged, and `alpha = 1` returns the market
/// probability itself rather than adding the market's full log-odds.
pub fn blend_market(p_neutral: f64, market_prob: f64, alpha: f64) -> AugurResult<f64> {
    blend_market_with(p_neutral, market_prob, alpha, BlendMode::Pooled)
}

/// Blend with an explicit mode.
///
/// Both probabilities are clamped away from {0, 1} before `logit`, and
/// `alpha` is clamped to [0, 1]. `alpha = 0` returns `p_neutral` unchanged.
pub fn blend_market_with(
    p_neutral: f64,
    market_prob: f64,
    alpha: f64,
    mode: BlendMode,
) -> AugurResult<f64> {
    check_probability("p_neutral", p_neutral)?;
    check_probability("market_prob", market_prob)?;
    let alpha = effective_alpha(alpha)?;
    if alpha == 0.0 {
        return Ok(p_neutral);
    }

    let neutral = logit(clamp_probability(p_neutral));
    let market = logit(clamp_probability(market_prob));

    let blended = match mode {
        BlendMode::Pooled => (1.0 - alpha) * neutral + alpha * market,
        BlendMode::Additive => neutral + alpha * market,
    };

    Ok(sigmoid(blended))
}

/// The market weight actually applied: `alpha` clamped to [0, 1].
/// Non-finite weights are rejected.
pub fn effective_alpha(alpha: f64) -> AugurResult<f64> {
    if !alpha.is_finite() {
        return Err(AugurError::InvalidProbability {
            field: "alpha".to_string(),
            value: alpha,
        });
    }
    Ok(clamp(alpha, 0.0, 1.0))
}

fn check_probability(field: &str, value: f64) -> AugurResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AugurError::InvalidProbability {
            field: field.to_string(),
            value,
        })
    }
}
