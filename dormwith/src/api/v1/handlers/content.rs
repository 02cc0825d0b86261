use axum::extract::{Path, State};
use axum_extra::extract::Query;

use crate::api::v1::dto::{
    CreateInquiryRequest, FaqResponse, InquiryResponse, ListFaqsQuery, PolicyResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::{AppJson, AppState};

/// `GET /api/v1/content/faqs`
#[utoipa::path(
    get,
    path = "/api/v1/content/faqs",
    tag = "content",
    operation_id = "content.faqs",
    params(ListFaqsQuery),
    responses((status = 200, description = "FAQ entries", body = Vec<FaqResponse>))
)]
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<ListFaqsQuery>,
) -> ApiResponse<Vec<FaqResponse>> {
    match state.content.faqs(query.category.as_deref()) {
        Ok(faqs) => ApiResponse::list(faqs.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/content/policies`
#[utoipa::path(
    get,
    path = "/api/v1/content/policies",
    tag = "content",
    operation_id = "content.policies",
    responses((status = 200, description = "Terms, privacy and service policies", body = Vec<PolicyResponse>))
)]
pub async fn list_policies(State(state): State<AppState>) -> ApiResponse<Vec<PolicyResponse>> {
    match state.content.policies() {
        Ok(policies) => ApiResponse::list(policies.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/content/policies/{policyId}`
#[utoipa::path(
    get,
    path = "/api/v1/content/policies/{policyId}",
    tag = "content",
    operation_id = "content.policies.get",
    params(("policyId" = String, Path, description = "terms, privacy or service")),
    responses(
        (status = 200, description = "Policy text", body = PolicyResponse),
        (status = 404, description = "Unknown policy", body = ApiError),
    )
)]
pub async fn get_policy(
    State(state): State<AppState>,
    Path(policy_id): Path<String>,
) -> ApiResponse<PolicyResponse> {
    match state.content.policy(&policy_id) {
        Ok(policy) => ApiResponse::success(policy.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/content/board-categories`
#[utoipa::path(
    get,
    path = "/api/v1/content/board-categories",
    tag = "content",
    operation_id = "content.boardCategories",
    responses((status = 200, description = "Board category filters", body = Vec<String>))
)]
pub async fn list_board_categories(State(state): State<AppState>) -> ApiResponse<Vec<String>> {
    ApiResponse::list(state.content.board_categories())
}

/// `GET /api/v1/content/tags`
#[utoipa::path(
    get,
    path = "/api/v1/content/tags",
    tag = "content",
    operation_id = "content.tags",
    responses((status = 200, description = "Selectable profile tags", body = Vec<String>))
)]
pub async fn list_tags(State(state): State<AppState>) -> ApiResponse<Vec<String>> {
    ApiResponse::list(state.content.profile_tags())
}

/// `GET /api/v1/content/inquiries`
#[utoipa::path(
    get,
    path = "/api/v1/content/inquiries",
    tag = "content",
    operation_id = "content.inquiries.list",
    responses((status = 200, description = "Submitted inquiries, oldest first", body = Vec<InquiryResponse>))
)]
pub async fn list_inquiries(State(state): State<AppState>) -> ApiResponse<Vec<InquiryResponse>> {
    match state.content.inquiries() {
        Ok(inquiries) => ApiResponse::list(inquiries.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/content/inquiries`
#[utoipa::path(
    post,
    path = "/api/v1/content/inquiries",
    tag = "content",
    operation_id = "content.inquiries.create",
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry recorded", body = InquiryResponse),
        (status = 400, description = "Blank title or content", body = ApiError),
    )
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateInquiryRequest>,
) -> ApiResponse<InquiryResponse> {
    match state.content.submit_inquiry(req.into()) {
        Ok(inquiry) => ApiResponse::created(inquiry.into()),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::create_router;
    use crate::api::v1::testing::{body_json, get, post_json, seeded_state};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn faqs_filter_by_category() {
        let app = create_router(seeded_state());
        let json = body_json(
            app.oneshot(get("/api/v1/content/faqs?category=%EB%A7%A4%EC%B9%AD"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["meta"]["total"], 2);
        assert_eq!(json["data"][0]["category"], "매칭");
    }

    #[tokio::test]
    async fn policy_lookup() {
        let app = create_router(seeded_state());
        let json = body_json(
            app.clone()
                .oneshot(get("/api/v1/content/policies/terms"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["lastUpdated"], "2024-01-01");

        let response = app
            .oneshot(get("/api/v1/content/policies/refund"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn inquiry_is_created_and_listed() {
        let app = create_router(seeded_state());
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/content/inquiries",
                r#"{"category":"매칭","title":"추천이 안 떠요","content":"목록이 비어 있습니다."}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["data"]["category"], "매칭");

        let json = body_json(app.oneshot(get("/api/v1/content/inquiries")).await.unwrap()).await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"][0]["id"], created["data"]["id"]);
    }

    #[tokio::test]
    async fn blank_inquiry_is_rejected() {
        let app = create_router(seeded_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/content/inquiries",
                r#"{"title":" ","content":"내용"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn static_lists() {
        let app = create_router(seeded_state());
        let tags = body_json(app.clone().oneshot(get("/api/v1/content/tags")).await.unwrap()).await;
        assert_eq!(tags["meta"]["total"], 8);
        let categories = body_json(
            app.oneshot(get("/api/v1/content/board-categories"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(categories["data"][4], "룸메이트");
    }
}
