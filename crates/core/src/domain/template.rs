use serde::{Deserialize, Serialize};

/// A previously completed analysis, used read-only as a benchmarking corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTemplate {
    pub product_name: String,
    pub category: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub ingredients: String,
    pub overall_score: f64,
    pub market_demand: f64,
    #[serde(default)]
    pub ingredient_trends: f64,
    pub competition_level: f64,
    pub innovation_factor: f64,
}
