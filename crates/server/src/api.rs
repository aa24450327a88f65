//! JSON API routes.
//!
//! - `GET  /`                        liveness message
//! - `GET  /api/dashboard/metrics`   headline dashboard numbers
//! - `GET  /api/products`            filtered, sorted, paginated product list
//! - `POST /api/products`            create and score a product
//! - `POST /api/products/analyze`    full concept analysis
//! - `POST /api/market-score`        single market score for an ingredient list
//! - `GET  /api/trends/match`        best trend row for one ingredient
//! - `GET  /api/competitors`         competitors with their market position
//!
//! Successful bodies are `{"success": true, "data": ...}`. Failures render an
//! [`InterfaceError`] as `{"success": false, "error", "detail", "correlation_id"}`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use flavorforge_core::catalog::{
    create_product, dashboard_metrics, list_products, Pagination, ProductQuery, SortBy,
    DEFAULT_REGION, DEFAULT_TIMEFRAME,
};
use flavorforge_core::config::CorsConfig;
use flavorforge_core::domain::competitor::PositionedCompetitor;
use flavorforge_core::domain::concept::{AnalysisResult, ProductConcept};
use flavorforge_core::domain::dashboard::DashboardMetrics;
use flavorforge_core::domain::product::{NewProduct, Product};
use flavorforge_core::domain::same_text;
use flavorforge_core::domain::trend::{MatchTier, TrendRecord};
use flavorforge_core::errors::{ApplicationError, DomainError, InterfaceError};
use flavorforge_core::scoring::{
    analyze_concept, default_analysis, market_score, match_trend, position_competitor,
    round_one_decimal, MarketScoreInput,
};
use flavorforge_data::{missing_as_empty, DataError, TabularDataProvider};

use crate::health;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn TabularDataProvider>,
    create_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn TabularDataProvider>) -> Self {
        Self { provider, create_lock: Arc::new(Mutex::new(())) }
    }
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    detail: &'a str,
    correlation_id: &'a str,
}

#[derive(Debug)]
pub struct ApiError(InterfaceError);

impl ApiError {
    fn from_application(error: ApplicationError, operation: &'static str) -> Self {
        let correlation_id = Uuid::new_v4().to_string();
        match &error {
            ApplicationError::Domain(_) | ApplicationError::NotFound(_) => warn!(
                event_name = "api.request.rejected",
                correlation_id = %correlation_id,
                operation,
                error = %error,
                "request rejected"
            ),
            ApplicationError::DataSource(_) | ApplicationError::Configuration(_) => error!(
                event_name = "api.request.failed",
                correlation_id = %correlation_id,
                operation,
                error = %error,
                "request failed"
            ),
        }
        Self(error.into_interface(correlation_id))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            success: false,
            error: self.0.user_message(),
            detail: self.0.message(),
            correlation_id: self.0.correlation_id(),
        };
        (status, Json(body)).into_response()
    }
}

trait OrApiError<T> {
    fn or_api(self, operation: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Into<ApplicationError>> OrApiError<T> for Result<T, E> {
    fn or_api(self, operation: &'static str) -> Result<T, ApiError> {
        self.map_err(|error| ApiError::from_application(error.into(), operation))
    }
}

/// Loads an optional table. Scoring degrades to its documented fallbacks when
/// a table is unavailable, so the failure is logged instead of returned.
fn optional_table<T>(result: Result<Vec<T>, DataError>, operation: &'static str) -> Option<Vec<T>> {
    match result {
        Ok(rows) => Some(rows),
        Err(error) => {
            warn!(
                event_name = "api.table.unavailable",
                operation,
                error = %error,
                "table unavailable, scoring will use fallback values"
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    let health_routes = health::router(state.provider.clone());

    Router::new()
        .route("/", get(root))
        .route("/api/dashboard/metrics", get(get_dashboard_metrics))
        .route("/api/products", get(get_products).post(post_product))
        .route("/api/products/analyze", post(analyze_product))
        .route("/api/market-score", post(post_market_score))
        .route("/api/trends/match", get(get_trend_match))
        .route("/api/competitors", get(get_competitors))
        .with_state(state)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(
                    event_name = "api.cors.origin_skipped",
                    origin = %origin,
                    "skipping origin that is not a valid header value"
                );
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub status: &'static str,
}

async fn root() -> Json<RootStatus> {
    Json(RootStatus { message: "FlavorForge API is running", status: "healthy" })
}

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub timeframe: Option<String>,
    pub region: Option<String>,
}

async fn get_dashboard_metrics(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<ApiResponse<DashboardMetrics>>, ApiError> {
    let rows = state.provider.dashboard_metrics().await.or_api("dashboard_metrics")?;
    let timeframe = params.timeframe.as_deref().unwrap_or(DEFAULT_TIMEFRAME);
    let region =
        params.region.as_deref().filter(|region| !region.is_empty()).unwrap_or(DEFAULT_REGION);

    Ok(Json(ApiResponse::success(dashboard_metrics(&rows, timeframe, region))))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

impl ListProductsParams {
    fn into_query(self) -> Result<ProductQuery, DomainError> {
        let defaults = ProductQuery::default();
        let page = bounded_u32("page", self.page, defaults.page)?;
        let limit = bounded_u32("limit", self.limit, defaults.limit)?;

        Ok(ProductQuery {
            page,
            limit,
            category: self.category,
            search: self.search,
            sort_by: self.sort_by.as_deref().map(SortBy::parse_lenient).unwrap_or_default(),
        })
    }
}

fn bounded_u32(field: &'static str, raw: Option<i64>, default: u32) -> Result<u32, DomainError> {
    match raw {
        None => Ok(default),
        Some(value) => u32::try_from(value).map_err(|_| DomainError::InvalidInput {
            field,
            message: format!("`{value}` is out of range"),
        }),
    }
}

async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let query = params.into_query().or_api("list_products")?;
    let products = state.provider.products().await.or_api("list_products")?;
    let page = list_products(products, &query).or_api("list_products")?;

    Ok(Json(ProductListResponse {
        success: true,
        data: page.products,
        pagination: page.pagination,
    }))
}

async fn post_product(
    State(state): State<AppState>,
    Json(request): Json<NewProduct>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let _guard = state.create_lock.lock().await;

    let existing = state.provider.products().await.or_api("create_product")?;
    let trends = optional_table(state.provider.market_trends().await, "create_product");
    let product = create_product(request, &existing, trends.as_deref(), Utc::now().date_naive());

    state.provider.append_product(product.clone()).await.or_api("create_product")?;

    info!(
        event_name = "api.products.created",
        product_id = product.id.0,
        market_score = product.market_score,
        "product created"
    );
    Ok(Json(ApiResponse::success(product)))
}

async fn analyze_product(
    State(state): State<AppState>,
    Json(concept): Json<ProductConcept>,
) -> Json<ApiResponse<AnalysisResult>> {
    let trends = missing_as_empty(state.provider.market_trends().await);
    let templates = missing_as_empty(state.provider.analysis_templates().await);

    let analysis = match (trends, templates) {
        (Ok(trends), Ok(templates)) => analyze_concept(&concept, &trends, &templates),
        (Err(error), _) | (_, Err(error)) => {
            warn!(
                event_name = "api.analysis.table_unreadable",
                concept = %concept.name,
                error = %error,
                "analysis tables could not be read, returning default report"
            );
            default_analysis()
        }
    };

    Json(ApiResponse::success(analysis))
}

#[derive(Debug, Deserialize)]
pub struct MarketScoreRequest {
    pub ingredients: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub target_demographics: String,
}

#[derive(Debug, Serialize)]
pub struct MarketScoreBody {
    pub market_score: f64,
}

async fn post_market_score(
    State(state): State<AppState>,
    Json(request): Json<MarketScoreRequest>,
) -> Json<ApiResponse<MarketScoreBody>> {
    let trends = optional_table(state.provider.market_trends().await, "market_score");
    let input = MarketScoreInput {
        ingredients: &request.ingredients,
        category: &request.category,
        region: &request.region,
        demographic: &request.target_demographics,
    };

    Json(ApiResponse::success(MarketScoreBody {
        market_score: market_score(input, trends.as_deref()),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TrendMatchParams {
    pub ingredient: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct TrendMatchBody {
    pub ingredient: String,
    pub tier: MatchTier,
    pub weighted_score: f64,
    pub record: TrendRecord,
}

async fn get_trend_match(
    State(state): State<AppState>,
    Query(params): Query<TrendMatchParams>,
) -> Result<Json<ApiResponse<TrendMatchBody>>, ApiError> {
    let trends = state.provider.market_trends().await.or_api("match_trend")?;
    let found = match_trend(&params.ingredient, &params.region, &params.category, &trends)
        .ok_or_else(|| {
            ApplicationError::NotFound(format!(
                "no trend data for ingredient `{}`",
                params.ingredient
            ))
        })
        .or_api("match_trend")?;

    let body = TrendMatchBody {
        tier: found.tier,
        weighted_score: round_one_decimal(found.weighted_score(&params.region, &params.category)),
        record: found.record.clone(),
        ingredient: params.ingredient,
    };
    Ok(Json(ApiResponse::success(body)))
}

#[derive(Debug, Default, Deserialize)]
pub struct CompetitorParams {
    pub category: Option<String>,
    pub region: Option<String>,
}

async fn get_competitors(
    State(state): State<AppState>,
    Query(params): Query<CompetitorParams>,
) -> Result<Json<ApiResponse<Vec<PositionedCompetitor>>>, ApiError> {
    let competitors = state.provider.competitors().await.or_api("list_competitors")?;
    let category = params.category.as_deref().filter(|category| !category.is_empty());
    let region = params.region.as_deref().filter(|region| !region.is_empty());

    let positioned = competitors
        .into_iter()
        .filter(|row| category.map_or(true, |category| same_text(&row.category, category)))
        .filter(|row| region.map_or(true, |region| same_text(&row.region, region)))
        .map(position_competitor)
        .collect();

    Ok(Json(ApiResponse::success(positioned)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use flavorforge_core::config::CorsConfig;
    use flavorforge_core::domain::competitor::Competitor;
    use flavorforge_core::domain::dashboard::MetricRow;
    use flavorforge_core::domain::product::{Product, ProductId};
    use flavorforge_core::domain::trend::TrendRecord;
    use flavorforge_data::{CsvDataProvider, InMemoryDataProvider, Table, TabularDataProvider};
    use tempfile::TempDir;

    use super::{router, AppState};

    fn any_origin() -> CorsConfig {
        CorsConfig { allowed_origins: vec!["*".to_string()] }
    }

    fn product(id: i64, name: &str, score: f64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category: category.to_string(),
            market_score: score,
            status: "Active".to_string(),
            created_date: format!("2024-10-{id:02}"),
            target_demographics: "18-25".to_string(),
            region: "Asia".to_string(),
            ingredients: "Mango, Chili".to_string(),
            flavor_profile: "Sweet".to_string(),
        }
    }

    fn trend(ingredient: &str, region: &str, category: &str, popularity: f64) -> TrendRecord {
        TrendRecord {
            ingredient_name: ingredient.to_string(),
            category: category.to_string(),
            region: region.to_string(),
            year: 2024,
            month: 6,
            popularity_score: popularity,
            growth_rate: 10.0,
        }
    }

    fn app(provider: InMemoryDataProvider) -> Router {
        router(AppState::new(Arc::new(provider)), &any_origin())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn root_reports_running() {
        let (status, body) = send(app(InMemoryDataProvider::default()), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "FlavorForge API is running");
    }

    #[tokio::test]
    async fn products_are_paginated_and_sorted() {
        let provider = InMemoryDataProvider::default().with_products(vec![
            product(1, "Chili Crunch", 70.0, "Snacks"),
            product(2, "Berry Fizz", 90.0, "Beverages"),
            product(3, "Almond Bar", 80.0, "Snacks"),
        ]);

        let (status, body) =
            send(app(provider), get("/api/products?limit=2&sort_by=market_score")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["name"], "Berry Fizz");
        assert_eq!(body["data"][1]["name"], "Almond Bar");
        assert_eq!(body["pagination"]["total_pages"], 2);
        assert_eq!(body["pagination"]["has_next"], true);
    }

    #[tokio::test]
    async fn invalid_limit_is_a_bad_request() {
        let (status, body) =
            send(app(InMemoryDataProvider::default()), get("/api/products?limit=500")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["detail"].as_str().unwrap_or_default().contains("limit"));
        assert!(body["correlation_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn missing_products_table_is_not_found() {
        let provider = InMemoryDataProvider::default().without(Table::Products);

        let (status, body) = send(app(provider), get("/api/products")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "The requested data could not be found.");
    }

    #[tokio::test]
    async fn created_product_gets_next_id_and_score() {
        let provider = Arc::new(
            InMemoryDataProvider::default()
                .with_products(vec![product(4, "Chili Crunch", 70.0, "Snacks")])
                .with_trends(vec![trend("Mango", "Asia", "Snacks", 80.0)]),
        );
        let app = router(AppState::new(provider.clone()), &any_origin());

        let (status, body) = send(
            app,
            post_json(
                "/api/products",
                json!({
                    "name": "Mango Pop",
                    "category": "Snacks",
                    "target_demographics": "18-25",
                    "region": "Asia",
                    "ingredients": "Mango"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 5);
        assert_eq!(body["data"]["status"], "Active");
        // 80*0.5 + 10*0.35 + 8 + 5 + 2 (demographic)
        assert_eq!(body["data"]["market_score"], 58.5);

        let stored = provider.products().await.expect("products");
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn create_product_without_trends_uses_fallback_score() {
        let provider = InMemoryDataProvider::default().without(Table::MarketTrends);

        let (status, body) = send(
            app(provider),
            post_json(
                "/api/products",
                json!({
                    "name": "Mystery Bar",
                    "category": "Snacks",
                    "target_demographics": "40-50",
                    "region": "Europe",
                    "ingredients": "Unobtainium"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["market_score"], 75.0);
    }

    #[tokio::test]
    async fn empty_ingredients_still_create_a_scored_product() {
        let provider = InMemoryDataProvider::default().with_trends(Vec::new());
        let (status, body) = send(
            app(provider),
            post_json(
                "/api/products",
                json!({
                    "name": "Mystery Bar",
                    "category": "Snacks",
                    "target_demographics": "18-25",
                    "region": "Asia",
                    "ingredients": ""
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["market_score"], 47.0);
    }

    #[tokio::test]
    async fn market_score_uses_unknown_ingredient_fallback() {
        let (status, body) = send(
            app(InMemoryDataProvider::default()),
            post_json(
                "/api/market-score",
                json!({
                    "ingredients": "Unobtainium",
                    "category": "Snacks",
                    "region": "Asia",
                    "target_demographics": "18-25"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["market_score"], 47.0);
    }

    #[tokio::test]
    async fn analyze_returns_bounded_report() {
        let (status, body) = send(
            app(InMemoryDataProvider::default()),
            post_json(
                "/api/products/analyze",
                json!({
                    "name": "Yuzu Sparkler",
                    "category": "Beverages",
                    "ingredients": "Yuzu, Ginger",
                    "target_demographics": "26-35",
                    "region": "Asia"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        for field in
            ["overall_score", "market_demand", "ingredient_trends", "competition_level", "innovation_factor"]
        {
            let value = body["data"][field].as_f64().expect("score");
            assert!((0.0..=100.0).contains(&value), "{field} out of range: {value}");
        }
        assert!(body["data"]["recommendation"].as_str().is_some());
    }

    #[tokio::test]
    async fn undecodable_trend_table_returns_default_analysis() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(
            dir.path().join("market_trends.csv"),
            "ingredient_name,category,region,year,month,popularity_score,growth_rate\n\
             Yuzu,Beverages,Asia,2024,8,very high,12\n",
        )
        .expect("write trends");
        let app = router(
            AppState::new(Arc::new(CsvDataProvider::new(dir.path()))),
            &any_origin(),
        );

        let (status, body) = send(
            app,
            post_json(
                "/api/products/analyze",
                json!({
                    "name": "Yuzu Sparkler",
                    "category": "Beverages",
                    "ingredients": "Yuzu",
                    "target_demographics": "26-35",
                    "region": "Asia"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["analysis_breakdown"]["used_default"], true);
        assert_eq!(body["data"]["overall_score"], 75.0);
        assert_eq!(body["data"]["competition_level"], 80.0);
    }

    #[tokio::test]
    async fn trend_match_prefers_region_and_category() {
        let provider = InMemoryDataProvider::default().with_trends(vec![
            trend("Mango", "Asia", "Snacks", 70.0),
            trend("Mango", "Asia", "Beverages", 50.0),
        ]);

        let (status, body) = send(
            app(provider),
            get("/api/trends/match?ingredient=mango&region=Asia&category=Snacks"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tier"], "region_and_category");
        assert_eq!(body["data"]["record"]["popularity_score"], 70.0);
    }

    #[tokio::test]
    async fn unknown_trend_is_not_found() {
        let (status, body) =
            send(app(InMemoryDataProvider::default()), get("/api/trends/match?ingredient=Unobtainium"))
                .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn competitors_are_filtered_and_positioned() {
        let provider = InMemoryDataProvider::default().with_competitors(vec![
            Competitor {
                competitor_name: "Big Snack Co".to_string(),
                category: "Snacks".to_string(),
                region: "Asia".to_string(),
                market_share: 16.0,
                avg_product_score: 90.0,
                growth_trend: 0.0,
                product_count: 40,
            },
            Competitor {
                competitor_name: "Fizz Labs".to_string(),
                category: "Beverages".to_string(),
                region: "Asia".to_string(),
                market_share: 2.0,
                avg_product_score: 60.0,
                growth_trend: 12.0,
                product_count: 3,
            },
        ]);

        let (status, body) = send(app(provider), get("/api/competitors?category=snacks")).await;

        assert_eq!(status, StatusCode::OK);
        let rows = body["data"].as_array().expect("array");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["competitor_name"], "Big Snack Co");
        assert_eq!(rows[0]["market_position"], "Market Leader");
    }

    #[tokio::test]
    async fn dashboard_metrics_use_defaults_for_absent_rows() {
        let provider = InMemoryDataProvider::default().with_metrics(vec![MetricRow {
            metric_name: "total_products".to_string(),
            metric_value: 312.0,
            growth_percentage: 4.5,
            timeframe: "30d".to_string(),
            region: "Global".to_string(),
        }]);

        let (status, body) = send(app(provider), get("/api/dashboard/metrics")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_products"], 312);
        assert_eq!(body["data"]["growth_metrics"]["products_growth"], 4.5);
        assert_eq!(body["data"]["active_users"], 1432);
    }
}
