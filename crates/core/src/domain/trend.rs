use serde::{Deserialize, Serialize};

use super::same_text;

/// One row of ingredient popularity data for a region, category and month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub ingredient_name: String,
    pub category: String,
    pub region: String,
    pub year: i32,
    pub month: u32,
    pub popularity_score: f64,
    pub growth_rate: f64,
}

impl TrendRecord {
    pub fn is_ingredient(&self, ingredient: &str) -> bool {
        same_text(&self.ingredient_name, ingredient)
    }

    pub fn in_region(&self, region: &str) -> bool {
        same_text(&self.region, region)
    }

    pub fn in_category(&self, category: &str) -> bool {
        same_text(&self.category, category)
    }
}

/// Which fallback tier produced a trend match, strictest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    RegionAndCategory,
    Region,
    Category,
    IngredientOnly,
}

impl MatchTier {
    pub const ORDERED: [MatchTier; 4] =
        [Self::RegionAndCategory, Self::Region, Self::Category, Self::IngredientOnly];

    pub fn matches_region(&self) -> bool {
        matches!(self, Self::RegionAndCategory | Self::Region)
    }

    pub fn matches_category(&self) -> bool {
        matches!(self, Self::RegionAndCategory | Self::Category)
    }
}
