use std::path::PathBuf;
use std::sync::Arc;

use flavorforge_core::config::AppConfig;
use flavorforge_data::{CsvDataProvider, Table, TabularDataProvider};
use thiserror::Error;
use tracing::{info, warn};

pub struct Application {
    pub config: AppConfig,
    pub provider: Arc<dyn TabularDataProvider>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("data directory `{path}` is not accessible: {source}")]
    DataDirectory { path: PathBuf, source: std::io::Error },
    #[error("data path `{0}` is not a directory")]
    NotADirectory(PathBuf),
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        data_dir = %config.data.dir.display(),
        "starting application bootstrap"
    );

    let dir = config.data.dir.clone();
    let metadata = tokio::fs::metadata(&dir)
        .await
        .map_err(|source| BootstrapError::DataDirectory { path: dir.clone(), source })?;
    if !metadata.is_dir() {
        return Err(BootstrapError::NotADirectory(dir));
    }

    let provider = CsvDataProvider::new(dir);
    for table in Table::ALL {
        if !provider.has_table(table).await {
            warn!(
                event_name = "system.bootstrap.table_missing",
                correlation_id = "bootstrap",
                table = table.file_name(),
                "data table is missing; dependent routes will answer 404"
            );
        }
    }

    info!(
        event_name = "system.bootstrap.data_ready",
        correlation_id = "bootstrap",
        "tabular data provider initialized"
    );

    Ok(Application { config, provider: Arc::new(provider) })
}
