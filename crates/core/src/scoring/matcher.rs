use serde::Serialize;

use crate::domain::same_text;
use crate::domain::trend::{MatchTier, TrendRecord};

pub const REGION_BONUS: f64 = 8.0;
pub const CATEGORY_BONUS: f64 = 5.0;
pub const RECENT_DATA_BONUS: f64 = 3.0;
pub const POPULARITY_WEIGHT: f64 = 0.5;
pub const GROWTH_WEIGHT: f64 = 0.35;

/// The "recent data" window is the fourth quarter of 2024.
const RECENT_YEAR: i32 = 2024;
const RECENT_FROM_MONTH: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrendMatch<'a> {
    pub tier: MatchTier,
    pub record: &'a TrendRecord,
}

/// Finds the trend record for `ingredient` using the tiered fallback.
///
/// Tiers are tried strictest first and the first non-empty tier wins. Within a
/// tier the last row in table order is chosen, not the latest by date, so the
/// result depends on the row order the provider hands in.
pub fn match_trend<'a>(
    ingredient: &str,
    region: &str,
    category: &str,
    trends: &'a [TrendRecord],
) -> Option<TrendMatch<'a>> {
    let candidates: Vec<&TrendRecord> =
        trends.iter().filter(|record| record.is_ingredient(ingredient)).collect();
    if candidates.is_empty() {
        return None;
    }

    MatchTier::ORDERED.into_iter().find_map(|tier| {
        candidates
            .iter()
            .rev()
            .copied()
            .find(|record| tier_accepts(tier, record, region, category))
            .map(|record| TrendMatch { tier, record })
    })
}

fn tier_accepts(tier: MatchTier, record: &TrendRecord, region: &str, category: &str) -> bool {
    match tier {
        MatchTier::RegionAndCategory => record.in_region(region) && record.in_category(category),
        MatchTier::Region => record.in_region(region),
        MatchTier::Category => record.in_category(category),
        MatchTier::IngredientOnly => true,
    }
}

impl TrendMatch<'_> {
    pub fn region_bonus(&self, region: &str) -> f64 {
        if same_text(&self.record.region, region) {
            REGION_BONUS
        } else {
            0.0
        }
    }

    pub fn category_bonus(&self, category: &str) -> f64 {
        if same_text(&self.record.category, category) {
            CATEGORY_BONUS
        } else {
            0.0
        }
    }

    pub fn recency_bonus(&self) -> f64 {
        if self.record.year == RECENT_YEAR && self.record.month >= RECENT_FROM_MONTH {
            RECENT_DATA_BONUS
        } else {
            0.0
        }
    }

    /// Per-ingredient score used by the single-score path.
    pub fn weighted_score(&self, region: &str, category: &str) -> f64 {
        self.record.popularity_score * POPULARITY_WEIGHT
            + self.record.growth_rate * GROWTH_WEIGHT
            + self.region_bonus(region)
            + self.category_bonus(category)
            + self.recency_bonus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(ingredient: &str, region: &str, category: &str, popularity: f64) -> TrendRecord {
        TrendRecord {
            ingredient_name: ingredient.to_string(),
            category: category.to_string(),
            region: region.to_string(),
            year: 2024,
            month: 6,
            popularity_score: popularity,
            growth_rate: 10.0,
        }
    }

    #[test]
    fn region_and_category_tier_beats_region_only() {
        let table = vec![
            trend("Mango", "Asia", "Beverages", 70.0),
            trend("Mango", "Asia", "Snacks", 90.0),
        ];

        let found = match_trend("Mango", "Asia", "Beverages", &table).expect("match");
        assert_eq!(found.tier, MatchTier::RegionAndCategory);
        assert_eq!(found.record.popularity_score, 70.0);
    }

    #[test]
    fn last_row_in_table_order_wins_within_a_tier() {
        let mut newer = trend("Mango", "Asia", "Beverages", 50.0);
        newer.year = 2025;
        let table = vec![newer, trend("Mango", "Asia", "Beverages", 65.0)];

        let found = match_trend("mango", "asia", "beverages", &table).expect("match");
        assert_eq!(found.record.popularity_score, 65.0);
        assert_eq!(found.record.year, 2024);
    }

    #[test]
    fn tiers_relax_in_order() {
        let table = vec![
            trend("Yuzu", "Europe", "Snacks", 10.0),
            trend("Yuzu", "Europe", "Beverages", 20.0),
            trend("Yuzu", "Asia", "Snacks", 30.0),
        ];

        let region = match_trend("Yuzu", "Asia", "Dairy", &table).expect("region tier");
        assert_eq!(region.tier, MatchTier::Region);
        assert_eq!(region.record.popularity_score, 30.0);

        let category = match_trend("Yuzu", "Africa", "Beverages", &table).expect("category tier");
        assert_eq!(category.tier, MatchTier::Category);
        assert_eq!(category.record.popularity_score, 20.0);

        let any = match_trend("Yuzu", "Africa", "Dairy", &table).expect("ingredient tier");
        assert_eq!(any.tier, MatchTier::IngredientOnly);
        assert_eq!(any.record.popularity_score, 30.0);
    }

    #[test]
    fn unknown_ingredient_is_not_found() {
        let table = vec![trend("Mango", "Asia", "Beverages", 70.0)];
        assert!(match_trend("Unobtainium", "Asia", "Beverages", &table).is_none());
        assert!(match_trend("Mango", "Asia", "Beverages", &[]).is_none());
    }

    #[test]
    fn weighted_score_applies_all_bonuses() {
        let mut record = trend("Matcha", "Asia", "Beverages", 80.0);
        record.growth_rate = 20.0;
        record.month = 11;
        let table = vec![record];

        let found = match_trend("Matcha", "Asia", "Beverages", &table).expect("match");
        // 80 * 0.5 + 20 * 0.35 + 8 + 5 + 3
        assert!((found.weighted_score("Asia", "Beverages") - 63.0).abs() < 1e-9);
    }

    #[test]
    fn recency_bonus_is_limited_to_late_2024() {
        let mut september = trend("Matcha", "Asia", "Beverages", 80.0);
        september.month = 9;
        let mut next_year = trend("Matcha", "Asia", "Beverages", 80.0);
        next_year.year = 2025;
        next_year.month = 12;

        let first = TrendMatch { tier: MatchTier::RegionAndCategory, record: &september };
        let second = TrendMatch { tier: MatchTier::RegionAndCategory, record: &next_year };
        assert_eq!(first.recency_bonus(), 0.0);
        assert_eq!(second.recency_bonus(), 0.0);
    }
}
