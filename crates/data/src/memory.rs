use async_trait::async_trait;
use tokio::sync::RwLock;

use flavorforge_core::domain::competitor::Competitor;
use flavorforge_core::domain::dashboard::MetricRow;
use flavorforge_core::domain::product::Product;
use flavorforge_core::domain::template::AnalysisTemplate;
use flavorforge_core::domain::trend::TrendRecord;

use crate::{DataError, Table, TabularDataProvider};

/// A table that may be absent, mirroring a missing CSV file.
type Slot<T> = RwLock<Option<Vec<T>>>;

/// Vector-backed provider. Every table starts present and empty.
pub struct InMemoryDataProvider {
    products: Slot<Product>,
    trends: Slot<TrendRecord>,
    competitors: Slot<Competitor>,
    templates: Slot<AnalysisTemplate>,
    metrics: Slot<MetricRow>,
}

impl Default for InMemoryDataProvider {
    fn default() -> Self {
        Self {
            products: RwLock::new(Some(Vec::new())),
            trends: RwLock::new(Some(Vec::new())),
            competitors: RwLock::new(Some(Vec::new())),
            templates: RwLock::new(Some(Vec::new())),
            metrics: RwLock::new(Some(Vec::new())),
        }
    }
}

impl InMemoryDataProvider {
    pub fn with_products(mut self, rows: Vec<Product>) -> Self {
        self.products = RwLock::new(Some(rows));
        self
    }

    pub fn with_trends(mut self, rows: Vec<TrendRecord>) -> Self {
        self.trends = RwLock::new(Some(rows));
        self
    }

    pub fn with_competitors(mut self, rows: Vec<Competitor>) -> Self {
        self.competitors = RwLock::new(Some(rows));
        self
    }

    pub fn with_templates(mut self, rows: Vec<AnalysisTemplate>) -> Self {
        self.templates = RwLock::new(Some(rows));
        self
    }

    pub fn with_metrics(mut self, rows: Vec<MetricRow>) -> Self {
        self.metrics = RwLock::new(Some(rows));
        self
    }

    pub fn without(mut self, table: Table) -> Self {
        match table {
            Table::Products => self.products = RwLock::new(None),
            Table::MarketTrends => self.trends = RwLock::new(None),
            Table::Competitors => self.competitors = RwLock::new(None),
            Table::AnalysisResults => self.templates = RwLock::new(None),
            Table::DashboardMetrics => self.metrics = RwLock::new(None),
        }
        self
    }
}

async fn snapshot<T: Clone>(slot: &Slot<T>, table: Table) -> Result<Vec<T>, DataError> {
    slot.read().await.clone().ok_or(DataError::MissingTable(table))
}

#[async_trait]
impl TabularDataProvider for InMemoryDataProvider {
    async fn products(&self) -> Result<Vec<Product>, DataError> {
        snapshot(&self.products, Table::Products).await
    }

    async fn market_trends(&self) -> Result<Vec<TrendRecord>, DataError> {
        snapshot(&self.trends, Table::MarketTrends).await
    }

    async fn competitors(&self) -> Result<Vec<Competitor>, DataError> {
        snapshot(&self.competitors, Table::Competitors).await
    }

    async fn analysis_templates(&self) -> Result<Vec<AnalysisTemplate>, DataError> {
        snapshot(&self.templates, Table::AnalysisResults).await
    }

    async fn dashboard_metrics(&self) -> Result<Vec<MetricRow>, DataError> {
        snapshot(&self.metrics, Table::DashboardMetrics).await
    }

    async fn append_product(&self, product: Product) -> Result<(), DataError> {
        let mut products = self.products.write().await;
        match products.as_mut() {
            Some(rows) => {
                rows.push(product);
                Ok(())
            }
            None => Err(DataError::MissingTable(Table::Products)),
        }
    }

    async fn has_table(&self, table: Table) -> bool {
        match table {
            Table::Products => self.products.read().await.is_some(),
            Table::MarketTrends => self.trends.read().await.is_some(),
            Table::Competitors => self.competitors.read().await.is_some(),
            Table::AnalysisResults => self.templates.read().await.is_some(),
            Table::DashboardMetrics => self.metrics.read().await.is_some(),
        }
    }
}
