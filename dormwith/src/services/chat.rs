use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{ChatListItem, ChatRoom, Message};
use crate::store::ChatStore;

#[derive(Clone)]
pub struct ChatService {
    store: Arc<Mutex<ChatStore>>,
}

impl ChatService {
    /// Load rooms, list rows and every room's transcript from the catalog.
    pub fn new(catalog: &dyn Catalog, message_max_chars: usize) -> Result<Self> {
        let rooms = catalog.chat_rooms()?;
        let mut messages = std::collections::HashMap::new();
        for room in &rooms {
            messages.insert(room.id.clone(), catalog.room_messages(&room.id)?);
        }

        let store = ChatStore::new(rooms, catalog.chat_list()?, messages, message_max_chars);
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
        })
    }

    pub fn list(&self) -> Result<Vec<ChatListItem>> {
        Ok(self.store.lock()?.list().to_vec())
    }

    pub fn room(&self, room_id: &str) -> Result<ChatRoom> {
        Ok(self.store.lock()?.room(room_id)?.clone())
    }

    pub fn messages(&self, room_id: &str) -> Result<Vec<Message>> {
        Ok(self.store.lock()?.messages(room_id)?.to_vec())
    }

    pub fn send_message(&self, room_id: &str, content: &str) -> Result<Message> {
        let message = self.store.lock()?.send_message(room_id, content)?;
        tracing::debug!(room_id, message_id = %message.id, "Message sent");
        Ok(message)
    }

    pub fn mark_read(&self, room_id: &str) -> Result<()> {
        self.store.lock()?.mark_read(room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::error::DormError;

    fn service() -> ChatService {
        let catalog = MockCatalog::new().unwrap();
        ChatService::new(&catalog, 500).unwrap()
    }

    #[test]
    fn transcripts_are_loaded_per_room() {
        let service = service();
        assert_eq!(service.messages("1").unwrap().len(), 7);
        assert_eq!(service.messages("2").unwrap().len(), 4);
        assert_eq!(service.list().unwrap().len(), 8);
    }

    #[test]
    fn sending_appends_to_room() {
        let service = service();
        let sent = service.send_message("2", "내일 봬요").unwrap();
        assert_eq!(sent.id, "5");

        let room = service.room("2").unwrap();
        assert_eq!(room.last_message.map(|m| m.content), Some("내일 봬요".to_string()));
        assert!(matches!(
            service.send_message("2", ""),
            Err(DormError::Validation(_))
        ));
    }

    #[test]
    fn mark_read_zeroes_list_counter() {
        let service = service();
        service.mark_read("1").unwrap();
        let row = service
            .list()
            .unwrap()
            .into_iter()
            .find(|i| i.id == "1")
            .unwrap();
        assert_eq!(row.unread_count, 0);
    }
}
