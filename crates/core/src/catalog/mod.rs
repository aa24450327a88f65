//! Product catalog operations layered over the tabular data: listing with
//! pagination, product creation and dashboard metric aggregation.

mod creation;
mod dashboard;
mod listing;

pub use creation::{create_product, next_product_id};
pub use dashboard::{dashboard_metrics, DEFAULT_REGION, DEFAULT_TIMEFRAME};
pub use listing::{list_products, Pagination, ProductPage, ProductQuery, SortBy};
