use axum::extract::State;

use crate::api::v1::dto::{LoginRequest, LoginResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::{AppJson, AppState};

/// `POST /api/v1/auth:login`
#[utoipa::path(
    post,
    path = "/api/v1/auth:login",
    tag = "auth",
    operation_id = "auth.login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "Wrong username or password", body = ApiError),
    ),
    security(())
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResponse<LoginResponse> {
    match state.auth.login(&req.username, &req.password) {
        Ok(profile) => ApiResponse::success(LoginResponse {
            user: profile.into(),
        }),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::create_router;
    use crate::api::v1::testing::{body_json, post_json, state};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn login_with_demo_credentials() {
        let app = create_router(state(vec!["key".to_string()]));
        let response = app
            .oneshot(post_json(
                "/api/v1/auth:login",
                r#"{"username":"sunmoon","password":"sunmoon"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["user"]["id"], "user-001");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let app = create_router(state(vec![]));
        let response = app
            .oneshot(post_json(
                "/api/v1/auth:login",
                r#"{"username":"sunmoon","password":"nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "아이디 또는 비밀번호를 확인하세요.");
    }

    #[tokio::test]
    async fn missing_field_is_named() {
        let app = create_router(state(vec![]));
        let response = app
            .oneshot(post_json("/api/v1/auth:login", r#"{"username":"sunmoon"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(json["error"]["message"], "Missing required field: password");
    }
}
