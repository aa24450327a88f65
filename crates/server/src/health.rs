use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use flavorforge_data::{Table, TabularDataProvider};

#[derive(Clone)]
pub struct HealthState {
    provider: Arc<dyn TabularDataProvider>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub data: HealthCheck,
    pub checked_at: String,
}

pub fn router(provider: Arc<dyn TabularDataProvider>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { provider })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let data = tables_check(state.provider.as_ref()).await;
    let ready = data.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "flavorforge-server runtime initialized".to_string(),
        },
        data,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn tables_check(provider: &dyn TabularDataProvider) -> HealthCheck {
    let mut missing = Vec::new();
    for table in Table::ALL {
        if !provider.has_table(table).await {
            missing.push(table.file_name());
        }
    }

    if missing.is_empty() {
        HealthCheck { status: "ready", detail: "all data tables are present".to_string() }
    } else {
        HealthCheck {
            status: "degraded",
            detail: format!("missing data tables: {}", missing.join(", ")),
        }
    }
}
