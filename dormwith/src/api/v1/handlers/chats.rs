use axum::extract::{Path, State};

use crate::api::v1::dto::{
    ChatListItemResponse, ChatRoomResponse, MessageResponse, SendMessageRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::{AppJson, AppState};

/// `GET /api/v1/chats`
#[utoipa::path(
    get,
    path = "/api/v1/chats",
    tag = "chats",
    operation_id = "chats.list",
    responses((status = 200, description = "Chat tab rows", body = Vec<ChatListItemResponse>))
)]
pub async fn list_chats(State(state): State<AppState>) -> ApiResponse<Vec<ChatListItemResponse>> {
    match state.chats.list() {
        Ok(items) => ApiResponse::list(items.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/chats/{roomId}`
#[utoipa::path(
    get,
    path = "/api/v1/chats/{roomId}",
    tag = "chats",
    operation_id = "chats.get",
    params(("roomId" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room with members", body = ChatRoomResponse),
        (status = 404, description = "Unknown room", body = ApiError),
    )
)]
pub async fn get_chat_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResponse<ChatRoomResponse> {
    match state.chats.room(&room_id) {
        Ok(room) => ApiResponse::success(room.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/chats/{roomId}/messages`
#[utoipa::path(
    get,
    path = "/api/v1/chats/{roomId}/messages",
    tag = "chats",
    operation_id = "chats.messages.list",
    params(("roomId" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Transcript, oldest first", body = Vec<MessageResponse>),
        (status = 404, description = "Unknown room", body = ApiError),
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResponse<Vec<MessageResponse>> {
    match state.chats.messages(&room_id) {
        Ok(messages) => ApiResponse::list(messages.into_iter().map(Into::into).collect()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chats/{roomId}/messages`
#[utoipa::path(
    post,
    path = "/api/v1/chats/{roomId}/messages",
    tag = "chats",
    operation_id = "chats.messages.send",
    params(("roomId" = String, Path, description = "Room ID")),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message appended", body = MessageResponse),
        (status = 400, description = "Blank or too long", body = ApiError),
        (status = 404, description = "Unknown room", body = ApiError),
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    AppJson(req): AppJson<SendMessageRequest>,
) -> ApiResponse<MessageResponse> {
    match state.chats.send_message(&room_id, &req.content) {
        Ok(message) => ApiResponse::created(message.into()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chats/{roomId}/read`
#[utoipa::path(
    post,
    path = "/api/v1/chats/{roomId}/read",
    tag = "chats",
    operation_id = "chats.read",
    params(("roomId" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room with unread count cleared", body = ChatRoomResponse),
        (status = 404, description = "Unknown room", body = ApiError),
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResponse<ChatRoomResponse> {
    if let Err(e) = state.chats.mark_read(&room_id) {
        return e.into();
    }
    match state.chats.room(&room_id) {
        Ok(room) => ApiResponse::success(room.into()),
        Err(e) => e.into(),
    }
}
