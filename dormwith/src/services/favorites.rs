use std::sync::{Arc, Mutex};

use validator::Validate;

use crate::error::Result;
use crate::models::FavoriteProfile;
use crate::store::FavoritesStore;

#[derive(Clone, Default)]
pub struct FavoritesService {
    store: Arc<Mutex<FavoritesStore>>,
}

impl FavoritesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the card and flip its membership. Returns the new state.
    pub fn toggle(&self, profile: FavoriteProfile) -> Result<bool> {
        profile.validate()?;
        let id = profile.id.clone();
        let favorite = self.store.lock()?.toggle(profile);
        tracing::debug!(profile_id = %id, favorite, "Toggled favorite");
        Ok(favorite)
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool> {
        Ok(self.store.lock()?.is_favorite(id))
    }

    pub fn list(&self) -> Result<Vec<FavoriteProfile>> {
        Ok(self.store.lock()?.list().to_vec())
    }
}
