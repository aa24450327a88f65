use serde::{Deserialize, Serialize};

use super::trend::MatchTier;

/// A product idea submitted for analysis. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConcept {
    pub name: String,
    pub category: String,
    pub ingredients: String,
    pub target_demographics: String,
    pub region: String,
    #[serde(default)]
    pub flavor_profile: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Splits a comma-separated ingredient list and trims each token. Always
/// yields at least one token, which may be empty.
pub fn split_ingredients(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

impl ProductConcept {
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_ingredients(&self.ingredients)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientScoreSummary {
    pub avg_popularity: f64,
    pub avg_growth_rate: f64,
    pub trending_count: u32,
    pub total_ingredients: u32,
    pub regional_matches: u32,
    pub category_matches: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientInsight {
    pub ingredient: String,
    pub popularity: f64,
    pub growth_rate: f64,
    pub matched_tier: Option<MatchTier>,
    pub trending: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarProductsSummary {
    pub count: u32,
    pub avg_market_demand: f64,
    pub avg_competition_level: f64,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub trending_bonus: f64,
    pub match_bonus: f64,
    pub category_saturation: f64,
    pub similarity_competition: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBreakdown {
    pub ingredient_summary: IngredientScoreSummary,
    pub ingredients: Vec<IngredientInsight>,
    pub similar_products: SimilarProductsSummary,
    pub score_components: ScoreComponents,
    /// Set when the whole analysis was replaced by the default report.
    pub used_default: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub market_demand: f64,
    pub ingredient_trends: f64,
    pub competition_level: f64,
    pub innovation_factor: f64,
    pub recommendation: String,
    pub risk_factor: String,
    pub analysis_breakdown: AnalysisBreakdown,
}
