use crate::models::FavoriteProfile;

/// Hearted profiles, kept in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    profiles: Vec<FavoriteProfile>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the profile if its id is absent, remove it otherwise.
    ///
    /// Returns whether the profile is a favorite afterwards.
    pub fn toggle(&mut self, profile: FavoriteProfile) -> bool {
        match self.profiles.iter().position(|p| p.id == profile.id) {
            Some(pos) => {
                self.profiles.remove(pos);
                false
            }
            None => {
                self.profiles.push(profile);
                true
            }
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }

    pub fn list(&self) -> &[FavoriteProfile] {
        &self.profiles
    }
}
