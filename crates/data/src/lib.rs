//! Tabular data access for FlavorForge.
//!
//! Every read returns rows in source order. The scoring engine's
//! last-row-wins tie-break depends on this, so providers must never reorder.

use async_trait::async_trait;
use thiserror::Error;

use flavorforge_core::domain::competitor::Competitor;
use flavorforge_core::domain::dashboard::MetricRow;
use flavorforge_core::domain::product::Product;
use flavorforge_core::domain::template::AnalysisTemplate;
use flavorforge_core::domain::trend::TrendRecord;
use flavorforge_core::errors::ApplicationError;

pub mod csv_store;
pub mod memory;

pub use csv_store::CsvDataProvider;
pub use memory::InMemoryDataProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Products,
    MarketTrends,
    Competitors,
    AnalysisResults,
    DashboardMetrics,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Self::Products,
        Self::MarketTrends,
        Self::Competitors,
        Self::AnalysisResults,
        Self::DashboardMetrics,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Products => "products.csv",
            Self::MarketTrends => "market_trends.csv",
            Self::Competitors => "competitors.csv",
            Self::AnalysisResults => "analysis_results.csv",
            Self::DashboardMetrics => "dashboard_metrics.csv",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("table `{0}` was not found")]
    MissingTable(Table),
    #[error("could not access `{path}`: {source}")]
    Io { path: std::path::PathBuf, source: std::io::Error },
    #[error("could not decode `{table}`: {source}")]
    Csv { table: Table, source: csv::Error },
}

impl From<DataError> for ApplicationError {
    fn from(error: DataError) -> Self {
        match error {
            DataError::MissingTable(table) => Self::NotFound(format!("{table} not found")),
            other => Self::DataSource(other.to_string()),
        }
    }
}

/// Treats an absent table as an empty one. Any other failure, such as a row
/// that does not decode, is passed through.
pub fn missing_as_empty<T>(result: Result<Vec<T>, DataError>) -> Result<Vec<T>, DataError> {
    match result {
        Err(DataError::MissingTable(_)) => Ok(Vec::new()),
        other => other,
    }
}

#[async_trait]
pub trait TabularDataProvider: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, DataError>;
    async fn market_trends(&self) -> Result<Vec<TrendRecord>, DataError>;
    async fn competitors(&self) -> Result<Vec<Competitor>, DataError>;
    async fn analysis_templates(&self) -> Result<Vec<AnalysisTemplate>, DataError>;
    async fn dashboard_metrics(&self) -> Result<Vec<MetricRow>, DataError>;
    /// Appends one row to the products table. The table must already exist.
    async fn append_product(&self, product: Product) -> Result<(), DataError>;
    async fn has_table(&self, table: Table) -> bool;
}

#[cfg(test)]
mod tests {
    use flavorforge_core::errors::ApplicationError;

    use crate::{missing_as_empty, DataError, Table};

    #[test]
    fn missing_table_maps_to_not_found() {
        let error = ApplicationError::from(DataError::MissingTable(Table::Products));
        assert_eq!(error, ApplicationError::NotFound("products.csv not found".to_string()));
    }

    #[test]
    fn io_failure_maps_to_data_source() {
        let error = ApplicationError::from(DataError::Io {
            path: "data/products.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(matches!(error, ApplicationError::DataSource(message) if message.contains("denied")));
    }

    #[test]
    fn only_missing_tables_read_as_empty() {
        let missing: Result<Vec<u8>, DataError> = Err(DataError::MissingTable(Table::MarketTrends));
        assert_eq!(missing_as_empty(missing).expect("empty rows"), Vec::<u8>::new());

        let unreadable: Result<Vec<u8>, DataError> = Err(DataError::Io {
            path: "data/market_trends.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(matches!(missing_as_empty(unreadable), Err(DataError::Io { .. })));

        assert_eq!(missing_as_empty(Ok(vec![1u8, 2])).expect("rows"), vec![1, 2]);
    }
}
