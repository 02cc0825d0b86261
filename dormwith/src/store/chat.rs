use std::collections::HashMap;

use chrono::Utc;

use crate::error::{DormError, Result};
use crate::models::{ChatListItem, ChatRoom, Message, MessageKind, Sender};

/// Sender id used for messages the viewer writes.
pub const SELF_SENDER_ID: &str = "3";
pub const SELF_SENDER_NAME: &str = "나";

const JUST_NOW: &str = "방금 전";

/// Chat rooms, list rows and transcripts.
///
/// A room is known when it has a [`ChatRoom`] record. List rows without a
/// room can be listed but not opened.
#[derive(Debug, Clone)]
pub struct ChatStore {
    rooms: Vec<ChatRoom>,
    list: Vec<ChatListItem>,
    messages: HashMap<String, Vec<Message>>,
    max_chars: usize,
}

impl ChatStore {
    pub fn new(
        rooms: Vec<ChatRoom>,
        list: Vec<ChatListItem>,
        messages: HashMap<String, Vec<Message>>,
        max_chars: usize,
    ) -> Self {
        Self {
            rooms,
            list,
            messages,
            max_chars,
        }
    }

    pub fn list(&self) -> &[ChatListItem] {
        &self.list
    }

    pub fn room(&self, room_id: &str) -> Result<&ChatRoom> {
        self.rooms
            .iter()
            .find(|r| r.id == room_id)
            .ok_or_else(|| DormError::NotFound(format!("Chat room not found: {room_id}")))
    }

    /// Transcript of a known room, oldest first.
    pub fn messages(&self, room_id: &str) -> Result<&[Message]> {
        self.room(room_id)?;
        Ok(self
            .messages
            .get(room_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Append a text message from the viewer.
    pub fn send_message(&mut self, room_id: &str, content: &str) -> Result<Message> {
        self.room(room_id)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(DormError::Validation("Message content is empty".to_string()));
        }
        let chars = content.chars().count();
        if chars > self.max_chars {
            return Err(DormError::Validation(format!(
                "Message is {chars} characters, the limit is {}",
                self.max_chars
            )));
        }

        let transcript = self.messages.entry(room_id.to_string()).or_default();
        let message = Message {
            id: (transcript.len() + 1).to_string(),
            sender: Sender {
                id: SELF_SENDER_ID.to_string(),
                name: SELF_SENDER_NAME.to_string(),
                avatar: None,
            },
            content: content.to_string(),
            timestamp: Utc::now(),
            is_read: true,
            kind: MessageKind::Text,
        };
        transcript.push(message.clone());

        if let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) {
            room.last_message = Some(message.clone());
            room.updated_at = message.timestamp;
        }
        if let Some(item) = self.list.iter_mut().find(|i| i.id == room_id) {
            item.last_message = Some(message.content.clone());
            item.last_message_time = Some(JUST_NOW.to_string());
        }

        Ok(message)
    }

    /// Mark every message in the room read and clear its unread counters.
    pub fn mark_read(&mut self, room_id: &str) -> Result<()> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| DormError::NotFound(format!("Chat room not found: {room_id}")))?;
        room.unread_count = 0;
        if let Some(last) = room.last_message.as_mut() {
            last.is_read = true;
        }

        if let Some(transcript) = self.messages.get_mut(room_id) {
            transcript.iter_mut().for_each(|m| m.is_read = true);
        }
        if let Some(item) = self.list.iter_mut().find(|i| i.id == room_id) {
            item.unread_count = 0;
        }
        Ok(())
    }
}
