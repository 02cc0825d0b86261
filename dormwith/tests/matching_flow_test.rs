mod integration;

use axum::http::StatusCode;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use dormwith::api::create_router;
use integration::{app_state, body_json, init_test_logger, request};

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request(method, uri, None))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

fn ids(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn full_matching_lifecycle() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let (_, json) = call(&app, "GET", "/api/v1/matching/status").await;
    assert_eq!(json["data"]["waiting"], 2);
    assert_eq!(json["data"]["received"], 3);
    assert_eq!(json["data"]["matched"], 0);

    // Like moves the candidate to the back of the waiting list.
    let (status, json) = call(&app, "POST", "/api/v1/matching/recommended/rec-1/like").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "waiting");
    assert_eq!(json["data"]["counts"]["waiting"], 3);

    let (_, json) = call(&app, "GET", "/api/v1/matching/waiting").await;
    assert_eq!(ids(&json), vec!["wait-1", "wait-2", "rec-1"]);

    let (_, json) = call(&app, "GET", "/api/v1/matching/recommended").await;
    assert!(!ids(&json).contains(&"rec-1".to_string()));

    // Accept and decline drain the received list.
    let (_, json) = call(&app, "POST", "/api/v1/matching/received/recv-2/accept").await;
    assert_eq!(json["data"]["status"], "matched");
    let (_, json) = call(&app, "POST", "/api/v1/matching/received/recv-1/decline").await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(json["data"]["counts"]["received"], 1);
    assert_eq!(json["data"]["counts"]["matched"], 1);

    let (_, json) = call(&app, "GET", "/api/v1/matching/matched").await;
    assert_eq!(ids(&json), vec!["recv-2"]);

    let (_, json) = call(&app, "GET", "/api/v1/matching/users/recv-2").await;
    assert_eq!(json["data"]["status"], "matched");
    assert_eq!(json["data"]["user"]["id"], "recv-2");

    // A handled request cannot be handled again.
    let (status, _) = call(&app, "POST", "/api/v1/matching/received/recv-1/accept").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reject_hides_candidate_until_reinitialized() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let (status, _) = call(&app, "POST", "/api/v1/matching/recommended/rec-3/reject").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = call(&app, "GET", "/api/v1/matching/recommended").await;
    assert_eq!(json["meta"]["total"], 3);
    assert!(!ids(&json).contains(&"rec-3".to_string()));

    // Liking a rejected candidate is not possible.
    let (status, _) = call(&app, "POST", "/api/v1/matching/recommended/rec-3/like").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "POST", "/api/v1/matching:initialize").await;
    assert_eq!(status, StatusCode::OK);
    let (_, json) = call(&app, "GET", "/api/v1/matching/recommended").await;
    assert_eq!(json["meta"]["total"], 4);
}

#[tokio::test]
async fn unseeded_server_starts_empty() {
    init_test_logger();
    let app = create_router(app_state(vec![], false));

    let (_, json) = call(&app, "GET", "/api/v1/matching/status").await;
    assert_eq!(json["data"]["waiting"], 0);
    assert_eq!(json["data"]["received"], 0);

    let (_, json) = call(&app, "GET", "/api/v1/matching/recommended").await;
    assert_eq!(json["meta"]["total"], 0);

    let (_, json) = call(&app, "POST", "/api/v1/matching:initialize").await;
    assert_eq!(json["data"]["waiting"], 2);
}

#[tokio::test]
async fn rejecting_a_waiting_candidate_conflicts() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let (status, json) = call(&app, "POST", "/api/v1/matching/recommended/wait-1/reject").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "conflict");
}
