//! v1 Matching handlers.

use axum::extract::{Path, State};

use crate::api::v1::dto::{
    MatchDecisionResponse, MatchUserDetailResponse, MatchUserResponse, MatchingSwitch,
    PreferencesResponse, QuestionResponse, SavePreferencesRequest, StatusCountsResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::{AppJson, AppState};
use crate::error::Result;
use crate::models::{MatchUser, MatchingStatus, QUESTIONS};

fn user_list(users: Result<Vec<MatchUser>>) -> ApiResponse<Vec<MatchUserResponse>> {
    match users {
        Ok(users) => ApiResponse::list(users.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// Report where `user_id` ended up together with the new list sizes.
fn decision(
    state: &AppState,
    user_id: String,
    status: MatchingStatus,
) -> ApiResponse<MatchDecisionResponse> {
    match state.matching.status_counts() {
        Ok(counts) => ApiResponse::success(MatchDecisionResponse {
            user_id,
            status: status.into(),
            counts: counts.into(),
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/matching:initialize`
#[utoipa::path(
    post,
    path = "/api/v1/matching:initialize",
    tag = "matching",
    operation_id = "matching.initialize",
    responses(
        (status = 200, description = "Lists reloaded from the catalog", body = StatusCountsResponse),
    )
)]
pub async fn initialize_matching(
    State(state): State<AppState>,
) -> ApiResponse<StatusCountsResponse> {
    match state.matching.initialize() {
        Ok(counts) => ApiResponse::success(counts.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matching/status`
#[utoipa::path(
    get,
    path = "/api/v1/matching/status",
    tag = "matching",
    operation_id = "matching.status",
    responses(
        (status = 200, description = "Waiting, received and matched counts", body = StatusCountsResponse),
    )
)]
pub async fn get_status(State(state): State<AppState>) -> ApiResponse<StatusCountsResponse> {
    match state.matching.status_counts() {
        Ok(counts) => ApiResponse::success(counts.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matching/recommended`
#[utoipa::path(
    get,
    path = "/api/v1/matching/recommended",
    tag = "matching",
    operation_id = "matching.recommended",
    responses((status = 200, description = "Recommended candidates", body = Vec<MatchUserResponse>))
)]
pub async fn list_recommended(
    State(state): State<AppState>,
) -> ApiResponse<Vec<MatchUserResponse>> {
    user_list(state.matching.recommended())
}

/// `GET /api/v1/matching/waiting`
#[utoipa::path(
    get,
    path = "/api/v1/matching/waiting",
    tag = "matching",
    operation_id = "matching.waiting",
    responses((status = 200, description = "Candidates the viewer liked", body = Vec<MatchUserResponse>))
)]
pub async fn list_waiting(State(state): State<AppState>) -> ApiResponse<Vec<MatchUserResponse>> {
    user_list(state.matching.waiting())
}

/// `GET /api/v1/matching/received`
#[utoipa::path(
    get,
    path = "/api/v1/matching/received",
    tag = "matching",
    operation_id = "matching.received",
    responses((status = 200, description = "Requests sent to the viewer", body = Vec<MatchUserResponse>))
)]
pub async fn list_received(State(state): State<AppState>) -> ApiResponse<Vec<MatchUserResponse>> {
    user_list(state.matching.received())
}

/// `GET /api/v1/matching/matched`
#[utoipa::path(
    get,
    path = "/api/v1/matching/matched",
    tag = "matching",
    operation_id = "matching.matched",
    responses((status = 200, description = "Accepted matches", body = Vec<MatchUserResponse>))
)]
pub async fn list_matched(State(state): State<AppState>) -> ApiResponse<Vec<MatchUserResponse>> {
    user_list(state.matching.matched())
}

/// `GET /api/v1/matching/waiting/{userId}`
#[utoipa::path(
    get,
    path = "/api/v1/matching/waiting/{userId}",
    tag = "matching",
    operation_id = "matching.waiting.get",
    params(("userId" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Waiting candidate", body = MatchUserResponse),
        (status = 404, description = "Not in the waiting list", body = ApiError),
    )
)]
pub async fn get_waiting_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchUserResponse> {
    match state.matching.waiting_user(&user_id) {
        Ok(user) => ApiResponse::success(user.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matching/users/{userId}`
#[utoipa::path(
    get,
    path = "/api/v1/matching/users/{userId}",
    tag = "matching",
    operation_id = "matching.users.get",
    params(("userId" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate and its bucket", body = MatchUserDetailResponse),
        (status = 404, description = "Unknown candidate", body = ApiError),
    )
)]
pub async fn get_match_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchUserDetailResponse> {
    match state.matching.user(&user_id) {
        Ok((user, status)) => ApiResponse::success(MatchUserDetailResponse {
            user: user.into(),
            status: status.into(),
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/matching/recommended/{userId}/like`
#[utoipa::path(
    post,
    path = "/api/v1/matching/recommended/{userId}/like",
    tag = "matching",
    operation_id = "matching.like",
    params(("userId" = String, Path, description = "Recommended candidate ID")),
    responses(
        (status = 200, description = "Moved to waiting", body = MatchDecisionResponse),
        (status = 404, description = "Not in the recommended list", body = ApiError),
    )
)]
pub async fn like_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchDecisionResponse> {
    match state.matching.like(&user_id) {
        Ok(user) => decision(&state, user.id, MatchingStatus::Waiting),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/matching/recommended/{userId}/reject`
#[utoipa::path(
    post,
    path = "/api/v1/matching/recommended/{userId}/reject",
    tag = "matching",
    operation_id = "matching.reject",
    params(("userId" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Recorded as rejected", body = MatchDecisionResponse),
        (status = 409, description = "Candidate is waiting, received or matched", body = ApiError),
    )
)]
pub async fn reject_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchDecisionResponse> {
    match state.matching.reject(&user_id) {
        Ok(()) => decision(&state, user_id, MatchingStatus::Rejected),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/matching/received/{userId}/accept`
#[utoipa::path(
    post,
    path = "/api/v1/matching/received/{userId}/accept",
    tag = "matching",
    operation_id = "matching.accept",
    params(("userId" = String, Path, description = "Requesting user ID")),
    responses(
        (status = 200, description = "Moved to matched", body = MatchDecisionResponse),
        (status = 404, description = "No such request", body = ApiError),
    )
)]
pub async fn accept_request(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchDecisionResponse> {
    match state.matching.accept(&user_id) {
        Ok(user) => decision(&state, user.id, MatchingStatus::Matched),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/matching/received/{userId}/decline`
#[utoipa::path(
    post,
    path = "/api/v1/matching/received/{userId}/decline",
    tag = "matching",
    operation_id = "matching.decline",
    params(("userId" = String, Path, description = "Requesting user ID")),
    responses(
        (status = 200, description = "Request declined", body = MatchDecisionResponse),
        (status = 404, description = "No such request", body = ApiError),
    )
)]
pub async fn decline_request(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<MatchDecisionResponse> {
    match state.matching.decline(&user_id) {
        Ok(()) => decision(&state, user_id, MatchingStatus::Rejected),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matching/questions`
#[utoipa::path(
    get,
    path = "/api/v1/matching/questions",
    tag = "matching",
    operation_id = "matching.questions",
    responses((status = 200, description = "Lifestyle questionnaire", body = Vec<QuestionResponse>))
)]
pub async fn list_questions() -> ApiResponse<Vec<QuestionResponse>> {
    ApiResponse::list(QUESTIONS.iter().map(QuestionResponse::from).collect())
}

/// `GET /api/v1/matching/preferences`
#[utoipa::path(
    get,
    path = "/api/v1/matching/preferences",
    tag = "matching",
    operation_id = "matching.preferences.get",
    responses(
        (status = 200, description = "Saved questionnaire answers", body = PreferencesResponse),
        (status = 404, description = "Questionnaire not completed yet", body = ApiError),
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> ApiResponse<PreferencesResponse> {
    match state.users.preferences() {
        Ok(Some(preferences)) => ApiResponse::success(preferences.into()),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "No matching preferences saved"),
        Err(e) => e.into(),
    }
}

/// `PUT /api/v1/matching/preferences`
#[utoipa::path(
    put,
    path = "/api/v1/matching/preferences",
    tag = "matching",
    operation_id = "matching.preferences.save",
    request_body = SavePreferencesRequest,
    responses(
        (status = 200, description = "Answers saved", body = PreferencesResponse),
        (status = 400, description = "Missing or invalid answers", body = ApiError),
    )
)]
pub async fn save_preferences(
    State(state): State<AppState>,
    AppJson(req): AppJson<SavePreferencesRequest>,
) -> ApiResponse<PreferencesResponse> {
    match state.users.save_preferences(req.answers) {
        Ok(preferences) => ApiResponse::success(preferences.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matching/switch`
#[utoipa::path(
    get,
    path = "/api/v1/matching/switch",
    tag = "matching",
    operation_id = "matching.switch.get",
    responses((status = 200, description = "Whether matching is on", body = MatchingSwitch))
)]
pub async fn get_switch(State(state): State<AppState>) -> ApiResponse<MatchingSwitch> {
    match state.users.matching_on() {
        Ok(enabled) => ApiResponse::success(MatchingSwitch { enabled }),
        Err(e) => e.into(),
    }
}

/// `PUT /api/v1/matching/switch`
#[utoipa::path(
    put,
    path = "/api/v1/matching/switch",
    tag = "matching",
    operation_id = "matching.switch.set",
    request_body = MatchingSwitch,
    responses((status = 200, description = "Switch updated", body = MatchingSwitch))
)]
pub async fn set_switch(
    State(state): State<AppState>,
    AppJson(req): AppJson<MatchingSwitch>,
) -> ApiResponse<MatchingSwitch> {
    match state.users.set_matching_on(req.enabled) {
        Ok(enabled) => ApiResponse::success(MatchingSwitch { enabled }),
        Err(e) => e.into(),
    }
}
