use chrono::NaiveDate;

use crate::domain::product::{NewProduct, Product, ProductId};
use crate::domain::trend::TrendRecord;
use crate::scoring::{market_score, MarketScoreInput};

pub fn next_product_id(existing: &[Product]) -> ProductId {
    existing.iter().map(|product| product.id).max().map_or(ProductId(1), |max| ProductId(max.0 + 1))
}

/// Builds the product row to append: assigns the next id, scores the
/// product against the trend table (`None` when it could not be loaded) and
/// stamps the creation date.
pub fn create_product(
    request: NewProduct,
    existing: &[Product],
    trends: Option<&[TrendRecord]>,
    today: NaiveDate,
) -> Product {
    let score = market_score(MarketScoreInput::from(&request), trends);
    let id = next_product_id(existing);

    request.into_product(id, score, today.format("%Y-%m-%d").to_string())
}
