pub mod competitor;
pub mod concept;
pub mod dashboard;
pub mod product;
pub mod template;
pub mod trend;

/// Case-insensitive equality used for every ingredient, region and category
/// comparison.
pub fn same_text(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}
