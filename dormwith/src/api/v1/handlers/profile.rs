//! v1 Profile handlers: the viewer's own profile, settings and activity.

use axum::extract::State;
use axum_extra::extract::Query;

use crate::api::v1::dto::{
    ActivityStatsResponse, ListPostsQuery, MatchRecordResponse, NotificationSettingsResponse,
    PostResponse, PrivacySettingsResponse, ProfileResponse, UpdateNotificationSettingsRequest,
    UpdatePrivacySettingsRequest, UpdateProfileRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::{AppJson, AppState};
use crate::error::Result;
use crate::models::{MatchRecord, PostKind};

fn record_list(records: Result<Vec<MatchRecord>>) -> ApiResponse<Vec<MatchRecordResponse>> {
    match records {
        Ok(records) => ApiResponse::list(records.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profile`
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    operation_id = "profile.get",
    responses((status = 200, description = "Viewer profile", body = ProfileResponse))
)]
pub async fn get_profile(State(state): State<AppState>) -> ApiResponse<ProfileResponse> {
    match state.users.profile() {
        Ok(profile) => ApiResponse::success(profile.into()),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/profile`
#[utoipa::path(
    patch,
    path = "/api/v1/profile",
    tag = "profile",
    operation_id = "profile.update",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile after merging the provided fields", body = ProfileResponse),
        (status = 400, description = "Invalid field value", body = ApiError),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> ApiResponse<ProfileResponse> {
    match state.users.update_profile(req.into()) {
        Ok(profile) => ApiResponse::success(profile.into()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/profile:reset`
#[utoipa::path(
    post,
    path = "/api/v1/profile:reset",
    tag = "profile",
    operation_id = "profile.reset",
    responses((status = 200, description = "Defaults restored (sign-out)", body = ProfileResponse))
)]
pub async fn reset_profile(State(state): State<AppState>) -> ApiResponse<ProfileResponse> {
    match state.users.reset() {
        Ok(profile) => ApiResponse::success(profile.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profile/notifications`
#[utoipa::path(
    get,
    path = "/api/v1/profile/notifications",
    tag = "profile",
    operation_id = "profile.notifications.get",
    responses((status = 200, description = "Notification flags", body = NotificationSettingsResponse))
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> ApiResponse<NotificationSettingsResponse> {
    match state.users.notifications() {
        Ok(settings) => ApiResponse::success(settings.into()),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/profile/notifications`
#[utoipa::path(
    patch,
    path = "/api/v1/profile/notifications",
    tag = "profile",
    operation_id = "profile.notifications.update",
    request_body = UpdateNotificationSettingsRequest,
    responses((status = 200, description = "Flags after merging", body = NotificationSettingsResponse))
)]
pub async fn update_notifications(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateNotificationSettingsRequest>,
) -> ApiResponse<NotificationSettingsResponse> {
    match state.users.update_notifications(req.into()) {
        Ok(settings) => ApiResponse::success(settings.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profile/privacy`
#[utoipa::path(
    get,
    path = "/api/v1/profile/privacy",
    tag = "profile",
    operation_id = "profile.privacy.get",
    responses((status = 200, description = "Privacy flags", body = PrivacySettingsResponse))
)]
pub async fn get_privacy(State(state): State<AppState>) -> ApiResponse<PrivacySettingsResponse> {
    match state.users.privacy() {
        Ok(settings) => ApiResponse::success(settings.into()),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/profile/privacy`
#[utoipa::path(
    patch,
    path = "/api/v1/profile/privacy",
    tag = "profile",
    operation_id = "profile.privacy.update",
    request_body = UpdatePrivacySettingsRequest,
    responses((status = 200, description = "Flags after merging", body = PrivacySettingsResponse))
)]
pub async fn update_privacy(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdatePrivacySettingsRequest>,
) -> ApiResponse<PrivacySettingsResponse> {
    match state.users.update_privacy(req.into()) {
        Ok(settings) => ApiResponse::success(settings.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profile/activity`
#[utoipa::path(
    get,
    path = "/api/v1/profile/activity",
    tag = "profile",
    operation_id = "profile.activity",
    responses((status = 200, description = "Post and match counters", body = ActivityStatsResponse))
)]
pub async fn get_activity(State(state): State<AppState>) -> ApiResponse<ActivityStatsResponse> {
    match state.users.activity_stats() {
        Ok(stats) => ApiResponse::success(stats.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profile/history`
#[utoipa::path(
    get,
    path = "/api/v1/profile/history",
    tag = "profile",
    operation_id = "profile.history",
    responses((status = 200, description = "Past matching outcomes", body = Vec<MatchRecordResponse>))
)]
pub async fn list_history(State(state): State<AppState>) -> ApiResponse<Vec<MatchRecordResponse>> {
    record_list(state.users.history())
}

/// `GET /api/v1/profile/interests`
#[utoipa::path(
    get,
    path = "/api/v1/profile/interests",
    tag = "profile",
    operation_id = "profile.interests",
    responses((status = 200, description = "Profiles the viewer showed interest in", body = Vec<MatchRecordResponse>))
)]
pub async fn list_interests(
    State(state): State<AppState>,
) -> ApiResponse<Vec<MatchRecordResponse>> {
    record_list(state.users.interests())
}

/// `GET /api/v1/profile/posts`
#[utoipa::path(
    get,
    path = "/api/v1/profile/posts",
    tag = "profile",
    operation_id = "profile.posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Posts in the requested group", body = Vec<PostResponse>),
        (status = 400, description = "Unknown kind", body = ApiError),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> ApiResponse<Vec<PostResponse>> {
    let kind = match query.kind.as_deref() {
        None => PostKind::default(),
        Some(raw) => match raw.parse::<PostKind>() {
            Ok(kind) => kind,
            Err(message) => return ApiResponse::error(ErrorCode::InvalidRequest, message),
        },
    };

    match state.users.posts(kind) {
        Ok(posts) => ApiResponse::list(posts.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::create_router;
    use crate::api::v1::testing::{body_json, get, patch_json, post, seeded_state};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn patch_merges_and_reset_restores() {
        let app = create_router(seeded_state());

        let response = app
            .clone()
            .oneshot(patch_json("/api/v1/profile", r#"{"bio":"새 자기소개","grade":4}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["bio"], "새 자기소개");
        assert_eq!(json["data"]["grade"], 4);
        assert_eq!(json["data"]["name"], "홍길동");

        let json = body_json(app.oneshot(post("/api/v1/profile:reset")).await.unwrap()).await;
        assert_ne!(json["data"]["bio"], "새 자기소개");
    }

    #[tokio::test]
    async fn zero_grade_is_rejected() {
        let app = create_router(seeded_state());
        let response = app
            .oneshot(patch_json("/api/v1/profile", r#"{"grade":0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn notification_patch_keeps_other_flags() {
        let app = create_router(seeded_state());
        let json = body_json(
            app.oneshot(patch_json(
                "/api/v1/profile/notifications",
                r#"{"emailNotification":true}"#,
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["emailNotification"], true);
        assert_eq!(json["data"]["matchNotification"], true);
    }

    #[tokio::test]
    async fn posts_by_kind() {
        let app = create_router(seeded_state());

        let liked = body_json(
            app.clone()
                .oneshot(get("/api/v1/profile/posts?kind=liked"))
                .await
                .unwrap(),
        )
        .await;
        let bookmarked = body_json(
            app.clone()
                .oneshot(get("/api/v1/profile/posts?kind=bookmarked"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(
            bookmarked["meta"]["total"].as_u64().unwrap(),
            liked["meta"]["total"].as_u64().unwrap() + 1
        );

        let response = app
            .oneshot(get("/api/v1/profile/posts?kind=shared"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn activity_counts_posts() {
        let app = create_router(seeded_state());
        let mine = body_json(app.clone().oneshot(get("/api/v1/profile/posts")).await.unwrap()).await;
        let stats = body_json(app.oneshot(get("/api/v1/profile/activity")).await.unwrap()).await;
        assert_eq!(stats["data"]["totalPosts"], mine["meta"]["total"]);
    }
}
