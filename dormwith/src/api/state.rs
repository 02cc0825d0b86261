use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::services::{
    AuthService, ChatService, ContentService, FavoritesService, MatchingService, UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Seed source every service was built from.
    pub catalog: Arc<dyn Catalog>,
    pub matching: MatchingService,
    pub favorites: FavoritesService,
    pub users: UserService,
    pub chats: ChatService,
    pub content: ContentService,
    pub auth: AuthService,
}

impl AppState {
    /// Build every service over `catalog`.
    ///
    /// The matching lists start empty. They are filled by
    /// [`MatchingService::initialize`], either at startup when seeding is
    /// enabled or through `POST /matching:initialize`.
    pub fn new(config: Config, catalog: Arc<dyn Catalog>) -> Result<Self> {
        let config = Arc::new(config);
        let users = UserService::new(catalog.clone())?;
        let chats = ChatService::new(catalog.as_ref(), config.chat.message_max_chars)?;
        let auth = AuthService::new(config.auth.clone(), users.clone());

        Ok(Self {
            matching: MatchingService::new(catalog.clone()),
            favorites: FavoritesService::new(),
            content: ContentService::new(catalog.clone()),
            users,
            chats,
            auth,
            catalog,
            config,
        })
    }
}
