use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use flavorforge_core::domain::competitor::Competitor;
use flavorforge_core::domain::dashboard::MetricRow;
use flavorforge_core::domain::product::{Product, ProductId};
use flavorforge_core::domain::template::AnalysisTemplate;
use flavorforge_core::domain::trend::TrendRecord;

use crate::{DataError, Table, TabularDataProvider};

pub const PRODUCT_COLUMNS: [&str; 10] = [
    "id",
    "name",
    "category",
    "market_score",
    "status",
    "created_date",
    "target_demographics",
    "region",
    "ingredients",
    "flavor_profile",
];

/// Reads each table from `<dir>/<table>.csv` on every call. Nothing is cached,
/// so edits to the files are visible to the next request.
#[derive(Debug)]
pub struct CsvDataProvider {
    dir: PathBuf,
    append_lock: Mutex<()>,
}

impl CsvDataProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), append_lock: Mutex::new(()) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, table: Table) -> PathBuf {
        self.dir.join(table.file_name())
    }

    async fn read_raw(&self, table: Table) -> Result<String, DataError> {
        let path = self.table_path(table);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(raw),
            Err(source) if source.kind() == ErrorKind::NotFound => {
                Err(DataError::MissingTable(table))
            }
            Err(source) => Err(DataError::Io { path, source }),
        }
    }

    async fn read_table<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, DataError> {
        let raw = self.read_raw(table).await?;
        decode_rows(table, &raw)
    }
}

fn csv_reader(raw: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes())
}

fn decode_rows<T: DeserializeOwned>(table: Table, raw: &str) -> Result<Vec<T>, DataError> {
    let mut reader = csv_reader(raw);
    let rows = reader
        .deserialize()
        .map(|row| row.map_err(|source| DataError::Csv { table, source }))
        .collect();
    rows
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    market_score: Option<f64>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    created_date: String,
    #[serde(default)]
    target_demographics: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    flavor_profile: String,
}

impl ProductRow {
    fn into_product(self) -> Option<Product> {
        let id = match self.id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                debug!(
                    event_name = "data.products.row_skipped",
                    raw_id = %self.id,
                    "skipping product row with non-integer id"
                );
                return None;
            }
        };

        Some(Product {
            id: ProductId(id),
            name: self.name,
            category: self.category,
            market_score: self.market_score.unwrap_or_default(),
            status: self.status,
            created_date: self.created_date,
            target_demographics: self.target_demographics,
            region: self.region,
            ingredients: self.ingredients,
            flavor_profile: self.flavor_profile,
        })
    }
}

fn product_field(product: &Product, column: &str) -> String {
    match column {
        "id" => product.id.0.to_string(),
        "name" => product.name.clone(),
        "category" => product.category.clone(),
        "market_score" => product.market_score.to_string(),
        "status" => product.status.clone(),
        "created_date" => product.created_date.clone(),
        "target_demographics" => product.target_demographics.clone(),
        "region" => product.region.clone(),
        "ingredients" => product.ingredients.clone(),
        "flavor_profile" => product.flavor_profile.clone(),
        _ => String::new(),
    }
}

fn encode_record<I, S>(fields: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(fields)?;
    writer.into_inner().map_err(|error| csv::Error::from(error.into_error()))
}

#[async_trait]
impl TabularDataProvider for CsvDataProvider {
    async fn products(&self) -> Result<Vec<Product>, DataError> {
        let rows: Vec<ProductRow> = self.read_table(Table::Products).await?;
        Ok(rows.into_iter().filter_map(ProductRow::into_product).collect())
    }

    async fn market_trends(&self) -> Result<Vec<TrendRecord>, DataError> {
        self.read_table(Table::MarketTrends).await
    }

    async fn competitors(&self) -> Result<Vec<Competitor>, DataError> {
        self.read_table(Table::Competitors).await
    }

    async fn analysis_templates(&self) -> Result<Vec<AnalysisTemplate>, DataError> {
        self.read_table(Table::AnalysisResults).await
    }

    async fn dashboard_metrics(&self) -> Result<Vec<MetricRow>, DataError> {
        self.read_table(Table::DashboardMetrics).await
    }

    async fn append_product(&self, product: Product) -> Result<(), DataError> {
        let _guard = self.append_lock.lock().await;
        let table = Table::Products;
        let mut contents = self.read_raw(table).await?;

        let headers: Vec<String> = {
            let mut reader = csv_reader(&contents);
            let headers =
                reader.headers().map_err(|source| DataError::Csv { table, source })?;
            headers.iter().map(str::to_string).collect()
        };
        let headers = if headers.iter().all(|column| column.is_empty()) {
            let header_line = encode_record(PRODUCT_COLUMNS)
                .map_err(|source| DataError::Csv { table, source })?;
            contents.clear();
            contents.push_str(&String::from_utf8_lossy(&header_line));
            PRODUCT_COLUMNS.iter().map(|column| column.to_string()).collect()
        } else {
            headers
        };

        let row = encode_record(headers.iter().map(|column| product_field(&product, column)))
            .map_err(|source| DataError::Csv { table, source })?;
        if !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push_str(&String::from_utf8_lossy(&row));

        let path = self.table_path(table);
        tokio::fs::write(&path, contents).await.map_err(|source| DataError::Io { path, source })?;

        debug!(
            event_name = "data.products.appended",
            product_id = product.id.0,
            "appended product row"
        );
        Ok(())
    }

    async fn has_table(&self, table: Table) -> bool {
        tokio::fs::metadata(self.table_path(table))
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }
}
