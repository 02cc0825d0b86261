use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DormWith API",
        version = "1.0.0",
        description = "Dormitory roommate matching. REST API for matching, chat, profile and help-center content.",
    ),
    paths(
        handlers::health::health_check,
        handlers::auth::login,
        handlers::matching::initialize_matching,
        handlers::matching::get_status,
        handlers::matching::list_recommended,
        handlers::matching::list_waiting,
        handlers::matching::list_received,
        handlers::matching::list_matched,
        handlers::matching::get_waiting_user,
        handlers::matching::get_match_user,
        handlers::matching::like_user,
        handlers::matching::reject_user,
        handlers::matching::accept_request,
        handlers::matching::decline_request,
        handlers::matching::list_questions,
        handlers::matching::get_preferences,
        handlers::matching::save_preferences,
        handlers::matching::get_switch,
        handlers::matching::set_switch,
        handlers::favorites::list_favorites,
        handlers::favorites::toggle_favorite,
        handlers::favorites::get_favorite_status,
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        handlers::profile::reset_profile,
        handlers::profile::get_notifications,
        handlers::profile::update_notifications,
        handlers::profile::get_privacy,
        handlers::profile::update_privacy,
        handlers::profile::get_activity,
        handlers::profile::list_history,
        handlers::profile::list_interests,
        handlers::profile::list_posts,
        handlers::chats::list_chats,
        handlers::chats::get_chat_room,
        handlers::chats::list_messages,
        handlers::chats::send_message,
        handlers::chats::mark_read,
        handlers::content::list_faqs,
        handlers::content::list_policies,
        handlers::content::get_policy,
        handlers::content::list_board_categories,
        handlers::content::list_tags,
        handlers::content::list_inquiries,
        handlers::content::create_inquiry,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Common
        dto::common::V1Gender,
        dto::common::V1MatchingStatus,
        dto::common::V1MatchOutcome,
        dto::common::V1MessageType,
        dto::common::StatusCountsResponse,
        // Auth
        dto::auth::LoginRequest,
        dto::auth::LoginResponse,
        // Matching
        dto::matching::MatchUserResponse,
        dto::matching::MatchUserDetailResponse,
        dto::matching::MatchDecisionResponse,
        dto::matching::QuestionResponse,
        dto::matching::SavePreferencesRequest,
        dto::matching::PreferencesResponse,
        dto::matching::MatchingSwitch,
        // Favorites
        dto::favorites::FavoriteProfileDto,
        dto::favorites::FavoriteStatusResponse,
        // Profile
        dto::profile::UpdateProfileRequest,
        dto::profile::UpdateNotificationSettingsRequest,
        dto::profile::UpdatePrivacySettingsRequest,
        dto::profile::ListPostsQuery,
        dto::profile::ProfileResponse,
        dto::profile::NotificationSettingsResponse,
        dto::profile::PrivacySettingsResponse,
        dto::profile::ActivityStatsResponse,
        dto::profile::PostResponse,
        dto::profile::MatchRecordResponse,
        // Chats
        dto::chats::SendMessageRequest,
        dto::chats::SenderResponse,
        dto::chats::MessageResponse,
        dto::chats::ChatMemberResponse,
        dto::chats::ChatRoomResponse,
        dto::chats::ChatListItemResponse,
        // Content
        dto::content::ListFaqsQuery,
        dto::content::FaqResponse,
        dto::content::PolicyResponse,
        dto::content::V1InquiryCategory,
        dto::content::CreateInquiryRequest,
        dto::content::InquiryResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Demo sign-in"),
        (name = "matching", description = "Recommendation lists, requests and the lifestyle questionnaire"),
        (name = "favorites", description = "Hearted profile cards"),
        (name = "profile", description = "The viewer's profile, settings and activity"),
        (name = "chats", description = "Chat rooms and transcripts"),
        (name = "content", description = "FAQ, policies, static lists and inquiries"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
