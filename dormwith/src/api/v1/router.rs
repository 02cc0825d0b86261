use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::v1_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let matching = Router::new()
        .route("/status", get(handlers::matching::get_status))
        .route("/recommended", get(handlers::matching::list_recommended))
        .route(
            "/recommended/{userId}/like",
            post(handlers::matching::like_user),
        )
        .route(
            "/recommended/{userId}/reject",
            post(handlers::matching::reject_user),
        )
        .route("/waiting", get(handlers::matching::list_waiting))
        .route(
            "/waiting/{userId}",
            get(handlers::matching::get_waiting_user),
        )
        .route("/received", get(handlers::matching::list_received))
        .route(
            "/received/{userId}/accept",
            post(handlers::matching::accept_request),
        )
        .route(
            "/received/{userId}/decline",
            post(handlers::matching::decline_request),
        )
        .route("/matched", get(handlers::matching::list_matched))
        .route("/users/{userId}", get(handlers::matching::get_match_user))
        .route("/questions", get(handlers::matching::list_questions))
        .route(
            "/preferences",
            get(handlers::matching::get_preferences).put(handlers::matching::save_preferences),
        )
        .route(
            "/switch",
            get(handlers::matching::get_switch).put(handlers::matching::set_switch),
        );

    let favorites = Router::new()
        .route("/", get(handlers::favorites::list_favorites))
        .route(
            "/{profileId}",
            get(handlers::favorites::get_favorite_status),
        );

    let profile = Router::new()
        .route(
            "/",
            get(handlers::profile::get_profile).patch(handlers::profile::update_profile),
        )
        .route(
            "/notifications",
            get(handlers::profile::get_notifications)
                .patch(handlers::profile::update_notifications),
        )
        .route(
            "/privacy",
            get(handlers::profile::get_privacy).patch(handlers::profile::update_privacy),
        )
        .route("/activity", get(handlers::profile::get_activity))
        .route("/history", get(handlers::profile::list_history))
        .route("/interests", get(handlers::profile::list_interests))
        .route("/posts", get(handlers::profile::list_posts));

    let chats = Router::new()
        .route("/", get(handlers::chats::list_chats))
        .route("/{roomId}", get(handlers::chats::get_chat_room))
        .route(
            "/{roomId}/messages",
            get(handlers::chats::list_messages).post(handlers::chats::send_message),
        )
        .route("/{roomId}/read", post(handlers::chats::mark_read));

    let content = Router::new()
        .route("/faqs", get(handlers::content::list_faqs))
        .route("/policies", get(handlers::content::list_policies))
        .route("/policies/{policyId}", get(handlers::content::get_policy))
        .route(
            "/board-categories",
            get(handlers::content::list_board_categories),
        )
        .route("/tags", get(handlers::content::list_tags))
        .route(
            "/inquiries",
            get(handlers::content::list_inquiries).post(handlers::content::create_inquiry),
        );

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth:login", post(handlers::auth::login))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let protected_routes = Router::new()
        .route(
            "/matching:initialize",
            post(handlers::matching::initialize_matching),
        )
        .route(
            "/favorites:toggle",
            post(handlers::favorites::toggle_favorite),
        )
        .route("/profile:reset", post(handlers::profile::reset_profile))
        .nest("/matching", matching)
        .nest("/favorites", favorites)
        .nest("/profile", profile)
        .nest("/chats", chats)
        .nest("/content", content)
        .route_layer(middleware::from_fn_with_state(state, v1_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
