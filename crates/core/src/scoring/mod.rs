//! Market scoring engine for product concepts.
//!
//! Every scorer here is a pure function over in-memory tables. The two
//! best-effort entry points, [`market_score`] and [`analyze_concept`], never
//! fail: internal [`ScoringError`]s are logged and replaced by fixed
//! fallback values.

mod analyzer;
mod market_score;
mod matcher;
mod positioning;

pub use analyzer::{analyze_concept, default_analysis, try_analyze_concept};
pub use analyzer::{recommendation_for, risk_assessment};
pub use market_score::{market_score, try_market_score, MarketScoreInput};
pub use matcher::{match_trend, TrendMatch};
pub use positioning::{classify_position, position_competitor};

use crate::errors::ScoringError;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Restricts a score to `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn ensure_finite(stage: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::computation(stage, format!("non-finite value `{value}`")))
    }
}

pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) =
        values.into_iter().fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
