pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod scoring;

pub use catalog::{
    create_product, dashboard_metrics, list_products, next_product_id, Pagination, ProductPage,
    ProductQuery, SortBy,
};
pub use domain::competitor::{Competitor, MarketPosition, PositionedCompetitor};
pub use domain::concept::{AnalysisResult, ProductConcept};
pub use domain::dashboard::{DashboardMetrics, MetricRow};
pub use domain::product::{NewProduct, Product, ProductId};
pub use domain::template::AnalysisTemplate;
pub use domain::trend::{MatchTier, TrendRecord};
pub use errors::{ApplicationError, DomainError, InterfaceError, ScoringError};
pub use scoring::{
    analyze_concept, classify_position, market_score, match_trend, position_competitor,
    MarketScoreInput, TrendMatch,
};
