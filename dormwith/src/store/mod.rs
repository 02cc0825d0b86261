//! In-memory state owned by the services.
//!
//! Stores are plain synchronous structs. Sharing and locking happen one layer
//! up in [`crate::services`].

mod chat;
mod favorites;
mod matching;
mod user;

pub use chat::{ChatStore, SELF_SENDER_ID, SELF_SENDER_NAME};
pub use favorites::FavoritesStore;
pub use matching::{MatchingSeed, MatchingStore};
pub use user::UserStore;
