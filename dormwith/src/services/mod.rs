mod auth;
mod chat;
mod content;
mod favorites;
mod matching;
mod user;

pub use auth::{AuthService, LOGIN_FAILED};
pub use chat::ChatService;
pub use content::ContentService;
pub use favorites::FavoritesService;
pub use matching::MatchingService;
pub use user::UserService;
