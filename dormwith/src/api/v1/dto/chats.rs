//! Chat DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::V1MessageType;
use crate::models::{ChatListItem, ChatMember, ChatRoom, Message, Sender};

/// Request body for `POST /api/v1/chats/{roomId}/messages`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Trimmed before storing. Must not be blank.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SenderResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<Sender> for SenderResponse {
    fn from(sender: Sender) -> Self {
        Self {
            id: sender.id,
            name: sender.name,
            avatar: sender.avatar,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub sender: SenderResponse,
    pub content: String,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    #[serde(rename = "type")]
    pub message_type: V1MessageType,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender: message.sender.into(),
            content: message.content,
            timestamp: message.timestamp,
            is_read: message.is_read,
            message_type: message.kind.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMemberResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_online: bool,
}

impl From<ChatMember> for ChatMemberResponse {
    fn from(member: ChatMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            avatar: member.avatar,
            is_online: member.is_online,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_group: bool,
    pub members: Vec<ChatMemberResponse>,
    /// Members currently online.
    pub online_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessageResponse>,
    pub unread_count: u32,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<ChatRoom> for ChatRoomResponse {
    fn from(room: ChatRoom) -> Self {
        let online_count = room.online_count();
        Self {
            id: room.id,
            name: room.name,
            avatar: room.avatar,
            is_group: room.is_group,
            members: room.members.into_iter().map(Into::into).collect(),
            online_count,
            last_message: room.last_message.map(Into::into),
            unread_count: room.unread_count,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// One row of the chat tab.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatListItemResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    /// Relative label such as `"2분 전"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_time: Option<String>,
    pub unread_count: u32,
    pub is_group: bool,
}

impl From<ChatListItem> for ChatListItemResponse {
    fn from(item: ChatListItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            avatar: item.avatar,
            last_message: item.last_message,
            last_message_time: item.last_message_time,
            unread_count: item.unread_count,
            is_group: item.is_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;

    #[test]
    fn message_type_field_is_named_type() {
        let message = Message {
            id: "1".to_string(),
            sender: Sender {
                id: "3".to_string(),
                name: "나".to_string(),
                avatar: None,
            },
            content: "안녕".to_string(),
            timestamp: Utc::now(),
            is_read: false,
            kind: MessageKind::Text,
        };
        let json = serde_json::to_value(MessageResponse::from(message)).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["isRead"], false);
        assert!(json["sender"].get("avatar").is_none());
    }
}
