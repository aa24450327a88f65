use tracing::warn;

use super::matcher::match_trend;
use super::{clamp_score, ensure_finite, mean, round_one_decimal};
use crate::domain::concept::split_ingredients;
use crate::domain::product::NewProduct;
use crate::domain::trend::TrendRecord;
use crate::errors::ScoringError;

/// Per-ingredient score when no trend row mentions the ingredient.
pub const UNKNOWN_INGREDIENT_SCORE: f64 = 45.0;
/// Returned whenever the score cannot be computed.
pub const FALLBACK_MARKET_SCORE: f64 = 75.0;

const PRIME_DEMOGRAPHICS: [&str; 2] = ["18-25", "26-35"];
const SECONDARY_DEMOGRAPHIC: &str = "35-45";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketScoreInput<'a> {
    pub ingredients: &'a str,
    pub category: &'a str,
    pub region: &'a str,
    pub demographic: &'a str,
}

impl<'a> From<&'a NewProduct> for MarketScoreInput<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            ingredients: &product.ingredients,
            category: &product.category,
            region: &product.region,
            demographic: &product.target_demographics,
        }
    }
}

pub fn demographic_bonus(demographic: &str) -> f64 {
    if PRIME_DEMOGRAPHICS.contains(&demographic) {
        2.0
    } else if demographic == SECONDARY_DEMOGRAPHIC {
        1.0
    } else {
        0.0
    }
}

/// Single 0-100 score for a new product. `None` means the trend table could
/// not be loaded.
pub fn try_market_score(
    input: MarketScoreInput<'_>,
    trends: Option<&[TrendRecord]>,
) -> Result<f64, ScoringError> {
    let trends = trends.ok_or(ScoringError::MissingData("market_trends"))?;

    let mut ingredient_scores = Vec::new();
    for ingredient in split_ingredients(input.ingredients) {
        let score = match match_trend(ingredient, input.region, input.category, trends) {
            Some(found) => found.weighted_score(input.region, input.category),
            None => UNKNOWN_INGREDIENT_SCORE,
        };
        ingredient_scores.push(ensure_finite("ingredient_score", score)?);
    }

    let average = mean(ingredient_scores)
        .ok_or_else(|| ScoringError::computation("ingredient_average", "no ingredients"))?;
    let score = ensure_finite("market_score", average + demographic_bonus(input.demographic))?;

    Ok(round_one_decimal(clamp_score(score)))
}

/// Best-effort variant of [`try_market_score`]: any failure yields
/// [`FALLBACK_MARKET_SCORE`].
pub fn market_score(input: MarketScoreInput<'_>, trends: Option<&[TrendRecord]>) -> f64 {
    match try_market_score(input, trends) {
        Ok(score) => score,
        Err(error) => {
            warn!(
                event_name = "scoring.market_score.fallback",
                category = input.category,
                region = input.region,
                fallback = FALLBACK_MARKET_SCORE,
                error = %error,
                "market score fell back to default"
            );
            FALLBACK_MARKET_SCORE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(ingredients: &'a str, demographic: &'a str) -> MarketScoreInput<'a> {
        MarketScoreInput { ingredients, category: "Beverages", region: "Asia", demographic }
    }

    fn trend(ingredient: &str, popularity: f64, growth: f64) -> TrendRecord {
        TrendRecord {
            ingredient_name: ingredient.to_string(),
            category: "Beverages".to_string(),
            region: "Asia".to_string(),
            year: 2024,
            month: 11,
            popularity_score: popularity,
            growth_rate: growth,
        }
    }

    #[test]
    fn unknown_ingredient_scores_fixed_fallback() {
        let score = market_score(input("Unobtainium", "99-100"), Some(&[]));
        assert_eq!(score, 45.0);
    }

    #[test]
    fn unknown_ingredients_average_with_matched_ones() {
        let table = vec![trend("Matcha", 80.0, 20.0)];
        // Matcha = 40 + 7 + 8 + 5 + 3 = 63, Unobtainium = 45
        let score = market_score(input("Matcha, Unobtainium", "99-100"), Some(&table));
        assert_eq!(score, 54.0);
    }

    #[test]
    fn prime_demographic_adds_two_points() {
        let table = vec![trend("Matcha", 60.0, 4.0)];
        let base = market_score(input("Matcha", "99-100"), Some(&table));
        let prime = market_score(input("Matcha", "18-25"), Some(&table));
        let secondary = market_score(input("Matcha", "35-45"), Some(&table));

        assert!((prime - base - 2.0).abs() < 1e-9);
        assert!((secondary - base - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_clamped_to_upper_bound() {
        let table = vec![trend("Rocket Fuel", 100.0, 200.0)];
        assert_eq!(market_score(input("Rocket Fuel", "18-25"), Some(&table)), 100.0);
    }

    #[test]
    fn negative_growth_is_clamped_to_lower_bound() {
        let mut record = trend("Lard", 0.0, -200.0);
        record.region = "Europe".to_string();
        record.category = "Snacks".to_string();
        record.year = 2020;
        assert_eq!(market_score(input("Lard", "99-100"), Some(&[record])), 0.0);
    }

    #[test]
    fn missing_trend_table_falls_back_to_default() {
        assert_eq!(market_score(input("Matcha", "18-25"), None), FALLBACK_MARKET_SCORE);
        assert_eq!(
            try_market_score(input("Matcha", "18-25"), None),
            Err(ScoringError::MissingData("market_trends"))
        );
    }

    #[test]
    fn non_finite_trend_data_falls_back_to_default() {
        let table = vec![trend("Matcha", f64::NAN, 4.0)];
        assert!(try_market_score(input("Matcha", "18-25"), Some(&table)).is_err());
        assert_eq!(market_score(input("Matcha", "18-25"), Some(&table)), FALLBACK_MARKET_SCORE);
    }

    #[test]
    fn empty_ingredient_string_still_scores_one_token() {
        assert_eq!(market_score(input("", "26-35"), Some(&[])), 47.0);
    }

    #[test]
    fn ingredient_tokens_are_trimmed_and_case_insensitive() {
        let table = vec![trend("Matcha", 80.0, 20.0)];
        assert_eq!(market_score(input("  mATCHA  ", "99-100"), Some(&table)), 63.0);
    }
}
