use axum::extract::{Path, State};

use crate::api::v1::dto::{FavoriteProfileDto, FavoriteStatusResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::{AppJson, AppState};

/// `GET /api/v1/favorites`
#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    tag = "favorites",
    operation_id = "favorites.list",
    responses((status = 200, description = "Hearted profiles in insertion order", body = Vec<FavoriteProfileDto>))
)]
pub async fn list_favorites(State(state): State<AppState>) -> ApiResponse<Vec<FavoriteProfileDto>> {
    match state.favorites.list() {
        Ok(profiles) => ApiResponse::list(profiles.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/favorites:toggle`
#[utoipa::path(
    post,
    path = "/api/v1/favorites:toggle",
    tag = "favorites",
    operation_id = "favorites.toggle",
    request_body = FavoriteProfileDto,
    responses(
        (status = 200, description = "Membership flipped", body = FavoriteStatusResponse),
        (status = 400, description = "Invalid profile card", body = ApiError),
    )
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    AppJson(req): AppJson<FavoriteProfileDto>,
) -> ApiResponse<FavoriteStatusResponse> {
    let profile_id = req.id.clone();
    match state.favorites.toggle(req.into()) {
        Ok(favorite) => ApiResponse::success(FavoriteStatusResponse {
            profile_id,
            favorite,
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/favorites/{profileId}`
#[utoipa::path(
    get,
    path = "/api/v1/favorites/{profileId}",
    tag = "favorites",
    operation_id = "favorites.get",
    params(("profileId" = String, Path, description = "Profile ID")),
    responses((status = 200, description = "Whether the profile is hearted", body = FavoriteStatusResponse))
)]
pub async fn get_favorite_status(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> ApiResponse<FavoriteStatusResponse> {
    match state.favorites.is_favorite(&profile_id) {
        Ok(favorite) => ApiResponse::success(FavoriteStatusResponse {
            profile_id,
            favorite,
        }),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::create_router;
    use crate::api::v1::testing::{body_json, get, post_json, seeded_state};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    const CARD: &str = r#"{"id":"p-7","name":"정민수","major":"기계공학과","gender":"남성","dorm":"성화학숙","tags":["활발함"]}"#;

    #[tokio::test]
    async fn toggle_twice_restores_list() {
        let app = create_router(seeded_state());

        let json = body_json(
            app.clone()
                .oneshot(post_json("/api/v1/favorites:toggle", CARD))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["favorite"], true);

        let json = body_json(app.clone().oneshot(get("/api/v1/favorites/p-7")).await.unwrap()).await;
        assert_eq!(json["data"]["favorite"], true);

        let json = body_json(
            app.clone()
                .oneshot(post_json("/api/v1/favorites:toggle", CARD))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["favorite"], false);

        let json = body_json(app.oneshot(get("/api/v1/favorites")).await.unwrap()).await;
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn blank_id_is_rejected() {
        let app = create_router(seeded_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/favorites:toggle",
                r#"{"id":"","name":"x","major":"y","gender":"여성","dorm":"z"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
