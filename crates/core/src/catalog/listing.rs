use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::same_text;
use crate::errors::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    MarketScore,
    CreatedDate,
}

impl SortBy {
    /// Unknown values sort by name.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "market_score" => Self::MarketScore,
            "created_date" => Self::CreatedDate,
            _ => Self::Name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortBy,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category: None,
            search: None,
            sort_by: SortBy::Name,
        }
    }
}

impl ProductQuery {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.page < 1 {
            return Err(DomainError::InvalidInput {
                field: "page",
                message: "must be greater than or equal to 1".to_string(),
            });
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(DomainError::InvalidInput {
                field: "limit",
                message: format!("must be between 1 and {MAX_LIMIT}"),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

pub fn list_products(products: Vec<Product>, query: &ProductQuery) -> Result<ProductPage, DomainError> {
    query.validate()?;

    let search = query.search.as_deref().filter(|term| !term.is_empty()).map(str::to_lowercase);
    let mut filtered: Vec<Product> = products
        .into_iter()
        .filter(|product| match query.category.as_deref().filter(|c| !c.is_empty()) {
            Some(category) => same_text(&product.category, category),
            None => true,
        })
        .filter(|product| match &search {
            Some(term) => {
                product.name.to_lowercase().contains(term)
                    || product.ingredients.to_lowercase().contains(term)
            }
            None => true,
        })
        .collect();

    // Stable sorts keep file order among equal keys.
    match query.sort_by {
        SortBy::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::MarketScore => filtered.sort_by(|a, b| b.market_score.total_cmp(&a.market_score)),
        SortBy::CreatedDate => filtered.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
    }

    let total_items = filtered.len();
    let per_page = query.limit as usize;
    let total_pages = total_items.div_ceil(per_page);
    let offset = (query.page as usize - 1) * per_page;
    let products: Vec<Product> = filtered.into_iter().skip(offset).take(per_page).collect();

    Ok(ProductPage {
        products,
        pagination: Pagination {
            current_page: query.page,
            per_page: query.limit,
            total_items,
            total_pages,
            has_next: (query.page as usize) < total_pages,
            has_prev: query.page > 1,
        },
    })
}
