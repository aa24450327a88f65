use crate::domain::dashboard::{DashboardMetrics, GrowthMetrics, MetricRow};
use crate::domain::same_text;
use crate::scoring::round_one_decimal;

pub const DEFAULT_TIMEFRAME: &str = "30d";
pub const DEFAULT_REGION: &str = "Global";

/// Aggregates the dashboard rows for one timeframe and region. Metrics with
/// no matching row take their documented default.
pub fn dashboard_metrics(rows: &[MetricRow], timeframe: &str, region: &str) -> DashboardMetrics {
    let selected: Vec<&MetricRow> = rows
        .iter()
        .filter(|row| row.timeframe == timeframe && same_text(&row.region, region))
        .collect();

    let find = |name: &str| selected.iter().find(|row| row.metric_name == name);
    let value = |name: &str, default: f64| find(name).map_or(default, |row| row.metric_value);
    let growth = |name: &str, default: f64| find(name).map_or(default, |row| row.growth_percentage);

    DashboardMetrics {
        total_products: value("total_products", 247.0) as i64,
        success_rate: round_one_decimal(value("success_rate", 87.5)),
        active_users: value("active_users", 1432.0) as i64,
        trending_categories: value("trending_categories", 5.0) as i64,
        growth_metrics: GrowthMetrics {
            products_growth: growth("total_products", 12.3),
            success_rate_growth: growth("success_rate", 3.2),
            users_growth: growth("active_users", 8.1),
        },
    }
}
