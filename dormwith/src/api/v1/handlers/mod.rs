pub mod auth;
pub mod chats;
pub mod content;
pub mod favorites;
pub(crate) mod health;
pub mod matching;
pub mod profile;

pub use health::health_check;
