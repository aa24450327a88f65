use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCT_STATUS: &str = "Active";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub market_score: f64,
    pub status: String,
    pub created_date: String,
    pub target_demographics: String,
    pub region: String,
    pub ingredients: String,
    pub flavor_profile: String,
}

/// Inbound payload for creating a product. The market score, id, status and
/// creation date are assigned server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub target_demographics: String,
    pub region: String,
    pub ingredients: String,
    #[serde(default)]
    pub flavor_profile: String,
}

impl NewProduct {
    pub fn into_product(
        self,
        id: ProductId,
        market_score: f64,
        created_date: impl Into<String>,
    ) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            market_score,
            status: DEFAULT_PRODUCT_STATUS.to_string(),
            created_date: created_date.into(),
            target_demographics: self.target_demographics,
            region: self.region,
            ingredients: self.ingredients,
            flavor_profile: self.flavor_profile,
        }
    }
}
