use crate::error::Result;
use crate::models::{
    ChatListItem, ChatRoom, Faq, MatchRecord, MatchUser, Message, NotificationSettings, Policy,
    Post, PostKind, UserProfile,
};

// ---------------------------------------------------------------------------
// Individual catalog traits
// ---------------------------------------------------------------------------

/// Candidate lists that seed the matching lifecycle.
pub trait MatchingCatalog: Send + Sync {
    fn recommended_users(&self) -> Result<Vec<MatchUser>>;
    fn waiting_matches(&self) -> Result<Vec<MatchUser>>;
    fn received_requests(&self) -> Result<Vec<MatchUser>>;
}

/// The viewer's own profile, defaults, activity and history.
pub trait ProfileCatalog: Send + Sync {
    fn current_user(&self) -> Result<UserProfile>;
    fn default_notification_settings(&self) -> Result<NotificationSettings>;
    fn posts(&self, kind: PostKind) -> Result<Vec<Post>>;
    fn matching_history(&self) -> Result<Vec<MatchRecord>>;
    fn interested_matches(&self) -> Result<Vec<MatchRecord>>;
}

/// Rooms, list rows and transcripts for the chat tab.
pub trait ChatCatalog: Send + Sync {
    fn chat_rooms(&self) -> Result<Vec<ChatRoom>>;
    fn chat_list(&self) -> Result<Vec<ChatListItem>>;
    /// Transcript of one room, oldest first. Unknown rooms yield an empty list.
    fn room_messages(&self, room_id: &str) -> Result<Vec<Message>>;
}

/// Static help and legal content.
pub trait ContentCatalog: Send + Sync {
    fn faqs(&self) -> Result<Vec<Faq>>;
    fn policies(&self) -> Result<Vec<Policy>>;
}

// ---------------------------------------------------------------------------
// Composite catalog
// ---------------------------------------------------------------------------

/// Read-only source of every seed table the stores start from.
///
/// Stands in for the backend read endpoints. Services hold it as
/// `Arc<dyn Catalog>` so a real source can replace [`super::MockCatalog`].
pub trait Catalog: MatchingCatalog + ProfileCatalog + ChatCatalog + ContentCatalog {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &str;
}
