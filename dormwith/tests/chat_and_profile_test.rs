mod integration;

use axum::http::StatusCode;
use tower::ServiceExt;

use dormwith::api::create_router;
use integration::{app_state, body_json, init_test_logger, request};

const FULL_SHEET: &str = r#"{"answers":{"1":"아침형","2":"매일 정리","3":"조용한 편","4":"22-24시","5":"혼합","6":"비흡연","7":"가끔 마심","8":"배려형","9":"도서관","10":"집콕"}}"#;

#[tokio::test]
async fn message_updates_list_row() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/chats/2/messages",
            Some(r#"{"content":"내일 봬요"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(request("GET", "/api/v1/chats", None))
        .await
        .unwrap();
    let json = body_json(response).await;
    let row = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "2")
        .unwrap()
        .clone();
    assert_eq!(row["lastMessage"], "내일 봬요");
    assert_eq!(row["lastMessageTime"], "방금 전");
}

#[tokio::test]
async fn listed_room_without_transcript_is_not_found() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let response = app
        .clone()
        .oneshot(request("GET", "/api/v1/chats", None))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 8);

    let response = app
        .oneshot(request("GET", "/api/v1/chats/5/messages", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_message_is_rejected() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    let body = serde_json::json!({ "content": "가".repeat(501) }).to_string();
    let response = app
        .oneshot(request("POST", "/api/v1/chats/1/messages", Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reset_restores_settings_and_preferences() {
    init_test_logger();
    let app = create_router(app_state(vec![], true));

    for (method, uri, body) in [
        ("PATCH", "/api/v1/profile/privacy", r#"{"profilePublic":false}"#),
        ("PUT", "/api/v1/matching/switch", r#"{"enabled":false}"#),
        ("PUT", "/api/v1/matching/preferences", FULL_SHEET),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, uri, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{method} {uri}");
    }

    let response = app
        .clone()
        .oneshot(request("POST", "/api/v1/profile:reset", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let privacy = body_json(
        app.clone()
            .oneshot(request("GET", "/api/v1/profile/privacy", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(privacy["data"]["profilePublic"], true);

    let switch = body_json(
        app.clone()
            .oneshot(request("GET", "/api/v1/matching/switch", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(switch["data"]["enabled"], true);

    let response = app
        .oneshot(request("GET", "/api/v1/matching/preferences", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
