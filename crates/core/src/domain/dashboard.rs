use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric_name: String,
    pub metric_value: f64,
    pub growth_percentage: f64,
    pub timeframe: String,
    pub region: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub products_growth: f64,
    pub success_rate_growth: f64,
    pub users_growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_products: i64,
    pub success_rate: f64,
    pub active_users: i64,
    pub trending_categories: i64,
    pub growth_metrics: GrowthMetrics,
}
