use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{
    ActivityStats, MatchOutcome, MatchRecord, MatchingPreferences, NotificationSettings,
    NotificationSettingsUpdate, Post, PostKind, PrivacySettings, PrivacySettingsUpdate,
    ProfileUpdate, UserProfile,
};
use crate::store::UserStore;

/// Profile, settings and activity of the local viewer.
#[derive(Clone)]
pub struct UserService {
    store: Arc<Mutex<UserStore>>,
    catalog: Arc<dyn Catalog>,
}

impl UserService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Result<Self> {
        let store = UserStore::new(
            catalog.current_user()?,
            catalog.default_notification_settings()?,
        );
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            catalog,
        })
    }

    pub fn profile(&self) -> Result<UserProfile> {
        Ok(self.store.lock()?.profile().clone())
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        if update.is_empty() {
            tracing::debug!("Empty profile update, nothing to merge");
        }
        let mut store = self.store.lock()?;
        let profile = store.update_profile(update)?.clone();
        tracing::debug!(user_id = %profile.id, "Profile updated");
        Ok(profile)
    }

    /// Sign-out: restore every default and return the restored profile.
    pub fn reset(&self) -> Result<UserProfile> {
        let mut store = self.store.lock()?;
        store.reset();
        tracing::info!("User state reset to defaults");
        Ok(store.profile().clone())
    }

    pub fn notifications(&self) -> Result<NotificationSettings> {
        Ok(self.store.lock()?.notifications())
    }

    pub fn update_notifications(
        &self,
        update: NotificationSettingsUpdate,
    ) -> Result<NotificationSettings> {
        Ok(self.store.lock()?.update_notifications(update))
    }

    pub fn privacy(&self) -> Result<PrivacySettings> {
        Ok(self.store.lock()?.privacy())
    }

    pub fn update_privacy(&self, update: PrivacySettingsUpdate) -> Result<PrivacySettings> {
        Ok(self.store.lock()?.update_privacy(update))
    }

    pub fn matching_on(&self) -> Result<bool> {
        Ok(self.store.lock()?.matching_on())
    }

    pub fn set_matching_on(&self, on: bool) -> Result<bool> {
        self.store.lock()?.set_matching_on(on);
        tracing::info!(on, "Matching switch changed");
        Ok(on)
    }

    pub fn preferences(&self) -> Result<Option<MatchingPreferences>> {
        Ok(self.store.lock()?.preferences().cloned())
    }

    /// Validate a questionnaire sheet and keep it as the current preferences.
    pub fn save_preferences(&self, answers: BTreeMap<u32, String>) -> Result<MatchingPreferences> {
        let preferences = MatchingPreferences::from_answers(answers)?;
        self.store.lock()?.save_preferences(preferences.clone());
        tracing::debug!(tags = %preferences.tags, "Matching preferences saved");
        Ok(preferences)
    }

    pub fn posts(&self, kind: PostKind) -> Result<Vec<Post>> {
        self.catalog.posts(kind)
    }

    pub fn history(&self) -> Result<Vec<MatchRecord>> {
        self.catalog.matching_history()
    }

    pub fn interests(&self) -> Result<Vec<MatchRecord>> {
        self.catalog.interested_matches()
    }

    /// Post counts per group plus outcome counts over the match history.
    pub fn activity_stats(&self) -> Result<ActivityStats> {
        let history = self.catalog.matching_history()?;
        let outcomes = |outcome: MatchOutcome| history.iter().filter(|m| m.status == outcome).count();

        Ok(ActivityStats {
            total_posts: self.catalog.posts(PostKind::Mine)?.len(),
            total_comments: self.catalog.posts(PostKind::Commented)?.len(),
            total_likes: self.catalog.posts(PostKind::Liked)?.len(),
            total_bookmarks: self.catalog.posts(PostKind::Bookmarked)?.len(),
            matching_count: outcomes(MatchOutcome::Matched),
            waiting_count: outcomes(MatchOutcome::Waiting),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::error::DormError;
    use crate::models::QUESTIONS;
    use pretty_assertions::assert_eq;

    fn service() -> UserService {
        let catalog: Arc<dyn Catalog> = Arc::new(MockCatalog::new().unwrap());
        UserService::new(catalog).unwrap()
    }

    #[test]
    fn starts_from_catalog_profile() {
        let service = service();
        let profile = service.profile().unwrap();
        assert_eq!(profile.id, "user-001");
        assert_eq!(profile.name, "홍길동");
        assert!(service.matching_on().unwrap());
        assert!(service.preferences().unwrap().is_none());
    }

    #[test]
    fn reset_undoes_updates() {
        let service = service();
        let original = service.profile().unwrap();

        service
            .update_profile(ProfileUpdate {
                name: Some("새 이름".to_string()),
                ..Default::default()
            })
            .unwrap();
        service.set_matching_on(false).unwrap();

        let restored = service.reset().unwrap();
        assert_eq!(restored, original);
        assert!(service.matching_on().unwrap());
    }

    #[test]
    fn preferences_need_every_answer() {
        let service = service();
        let mut answers: BTreeMap<u32, String> = QUESTIONS
            .iter()
            .map(|q| (q.id, q.options[0].to_string()))
            .collect();
        answers.remove(&10);

        let err = service.save_preferences(answers.clone()).unwrap_err();
        assert!(matches!(err, DormError::Validation(msg) if msg == "모든 질문에 답변해 주세요."));

        answers.insert(10, "집콕".to_string());
        let saved = service.save_preferences(answers).unwrap();
        assert_eq!(saved.tags, "아침형 • 매일 정리 • 조용한 편");
        assert_eq!(service.preferences().unwrap(), Some(saved));
    }

    #[test]
    fn activity_stats_count_catalog_rows() {
        let service = service();
        let stats = service.activity_stats().unwrap();

        assert_eq!(stats.total_posts, service.posts(PostKind::Mine).unwrap().len());
        assert_eq!(
            stats.total_bookmarks,
            service.posts(PostKind::Bookmarked).unwrap().len()
        );
        let open = service
            .history()
            .unwrap()
            .iter()
            .filter(|m| m.status != MatchOutcome::Rejected)
            .count();
        assert_eq!(stats.matching_count + stats.waiting_count, open);
    }
}
