//! REST API exposing the aggregation core.
//!
//! Routes mirror the scraper backend contract: config read/merge, quick
//! (single-card) and full (card-list) scrapes, and deck cost analysis.
//! Missing required input is a 400; anything the core cannot recover
//! from is a 500.

use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use crate::aggregator::Aggregator;
use crate::analysis::calculate_deck_cost;
use crate::config::{ConfigPatch, ScoutConfig};
use crate::models::{CardListing, DeckCostResult};

/// Shared application state: the live config and the adapter set.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<ScoutConfig>>,
    aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(config: ScoutConfig, aggregator: Arc<Aggregator>) -> Self {
        AppState {
            config: Arc::new(RwLock::new(config)),
            aggregator,
        }
    }

    /// Copy-on-read: every request works against its own snapshot, so a
    /// concurrent config update never affects an in-flight search.
    fn config_snapshot(&self) -> ScoutConfig {
        self.config.read().expect("config lock poisoned").clone()
    }
}

#[derive(Deserialize)]
struct QuickScrapeRequest {
    #[serde(rename = "cardName")]
    card_name: Option<String>,
}

#[derive(Deserialize)]
struct FullScrapeRequest {
    #[serde(rename = "cardList")]
    card_list: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct DeckCostRequest {
    #[serde(rename = "cardData")]
    card_data: Option<Vec<Value>>,
}

#[derive(Serialize)]
struct ScrapeResponse {
    message: String,
    data: Vec<CardListing>,
}

#[derive(Serialize)]
struct ConfigUpdateResponse {
    message: String,
    config: ScoutConfig,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

/// GET /api/config
async fn get_config_handler(State(state): State<AppState>) -> Json<ScoutConfig> {
    Json(state.config_snapshot())
}

/// PUT /api/config - merges a partial update into the live config
async fn put_config_handler(
    State(state): State<AppState>,
    Json(patch): Json<ConfigPatch>,
) -> Result<Json<ConfigUpdateResponse>, ApiError> {
    let merged = {
        let mut config = state.config.write().map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Configuration unavailable".to_string(),
                }),
            )
        })?;
        *config = config.merged(patch);
        config.clone()
    };

    log::info!("Configuration updated: {:?}", merged);

    Ok(Json(ConfigUpdateResponse {
        message: "Configuration updated".to_string(),
        config: merged,
    }))
}

/// POST /api/scrape/quick - search all enabled retailers for one card
async fn quick_scrape_handler(
    State(state): State<AppState>,
    Json(request): Json<QuickScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let card_name = match request.card_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(bad_request("cardName is required")),
    };

    let config = state.config_snapshot();
    log::info!("Initiating quick scrape for: {}", card_name);

    let data = state.aggregator.search(&card_name, &config).await;

    Ok(Json(ScrapeResponse {
        message: format!("Quick scrape completed for: {}", card_name),
        data,
    }))
}

/// POST /api/scrape/full - search for a list of cards, sequentially
async fn full_scrape_handler(
    State(state): State<AppState>,
    Json(request): Json<FullScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let card_list = match request.card_list {
        Some(list) if !list.is_empty() => list,
        _ => return Err(bad_request("cardList (array of strings) is required")),
    };

    let config = state.config_snapshot();
    log::info!("Initiating full scrape for {} cards", card_list.len());

    let data = state.aggregator.search_all(&card_list, &config).await;

    Ok(Json(ScrapeResponse {
        message: "Full scrape processed.".to_string(),
        data,
    }))
}

/// POST /api/analyze/deck-cost - minimize acquisition cost over listings
async fn deck_cost_handler(
    Json(request): Json<DeckCostRequest>,
) -> Result<Json<DeckCostResult>, ApiError> {
    let card_data = match request.card_data {
        Some(data) => data,
        None => {
            return Err(bad_request(
                "cardData (array of card objects) is required in the request body.",
            ))
        }
    };

    Ok(Json(calculate_deck_cost(&card_data)))
}

/// Build the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/config",
            get(get_config_handler).put(put_config_handler),
        )
        .route("/api/scrape/quick", post(quick_scrape_handler))
        .route("/api/scrape/full", post(full_scrape_handler))
        .route("/api/analyze/deck-cost", post(deck_cost_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
pub async fn serve(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
