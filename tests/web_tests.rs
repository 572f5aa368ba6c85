//! Integration tests for the REST API surface

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use card_scout::web::{create_router, AppState};
use card_scout::{Aggregator, ScoutConfig};

fn test_router() -> Router {
    let state = AppState::new(
        ScoutConfig::default(),
        Arc::new(Aggregator::new(Vec::new())),
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_config_returns_defaults() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["allowFoil"], json!(false));
    assert_eq!(body["allowOutOfStock"], json!(false));
    assert_eq!(body["retailers"]["F2F"], json!(true));
}

#[tokio::test]
async fn test_put_config_merges_and_persists() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/config",
            json!({ "allowFoil": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], json!("Configuration updated"));
    assert_eq!(body["config"]["allowFoil"], json!(true));
    // Fields not in the patch keep their value
    assert_eq!(body["config"]["allowOutOfStock"], json!(false));

    // The merge is visible to subsequent reads
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body["allowFoil"], json!(true));
}

#[tokio::test]
async fn test_quick_scrape_requires_card_name() {
    let response = test_router()
        .oneshot(json_request("POST", "/api/scrape/quick", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], json!("cardName is required"));
}

#[tokio::test]
async fn test_quick_scrape_rejects_blank_card_name() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/api/scrape/quick",
            json!({ "cardName": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quick_scrape_with_no_adapters_returns_empty_data() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/api/scrape/quick",
            json!({ "cardName": "Sol Ring" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(
        body["message"],
        json!("Quick scrape completed for: Sol Ring")
    );
}

#[tokio::test]
async fn test_full_scrape_requires_non_empty_card_list() {
    let response = test_router()
        .oneshot(json_request("POST", "/api/scrape/full", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/api/scrape/full",
            json!({ "cardList": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_scrape_processes_card_list() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/api/scrape/full",
            json!({ "cardList": ["Sol Ring", "Lightning Bolt"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], json!("Full scrape processed."));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_deck_cost_requires_card_data() {
    let response = test_router()
        .oneshot(json_request("POST", "/api/analyze/deck-cost", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deck_cost_analysis() {
    let card_data = json!({
        "cardData": [
            { "card_name": "Sol Ring", "price": 4.50, "retailer": "A" },
            { "card_name": "Sol Ring", "price": 3.25, "retailer": "B" },
            { "card_name": "Lightning Bolt", "price": 0.50, "retailer": "A" },
            { "card_name": 42, "price": "N/A" }
        ]
    });

    let response = test_router()
        .oneshot(json_request("POST", "/api/analyze/deck-cost", card_data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["totalCost"], json!(3.75));
    assert_eq!(body["uniqueCardCount"], json!(2));
    assert_eq!(body["totalListingsProcessed"], json!(4));
    assert_eq!(body["totalCardsProcessed"], json!(4));
    assert_eq!(body["skippedCount"], json!(1));
    assert_eq!(body["selectedListings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_deck_cost_empty_array() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/api/analyze/deck-cost",
            json!({ "cardData": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["totalCost"], json!(0.0));
    assert_eq!(body["uniqueCardCount"], json!(0));
    assert_eq!(body["selectedListings"], json!([]));
}
