use validator::Validate;

use crate::error::Result;
use crate::models::{
    MatchingPreferences, NotificationSettings, NotificationSettingsUpdate, PrivacySettings,
    PrivacySettingsUpdate, ProfileUpdate, UserProfile,
};

/// The local viewer's profile and settings.
///
/// Remembers the values it was created with so [`UserStore::reset`] can
/// restore them.
#[derive(Debug, Clone)]
pub struct UserStore {
    default_profile: UserProfile,
    default_notifications: NotificationSettings,
    profile: UserProfile,
    notifications: NotificationSettings,
    privacy: PrivacySettings,
    matching_on: bool,
    preferences: Option<MatchingPreferences>,
}

impl UserStore {
    pub fn new(profile: UserProfile, notifications: NotificationSettings) -> Self {
        Self {
            default_profile: profile.clone(),
            default_notifications: notifications,
            profile,
            notifications,
            privacy: PrivacySettings::default(),
            matching_on: true,
            preferences: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Validate `update` and merge the fields it carries.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&UserProfile> {
        update.validate()?;
        update.apply_to(&mut self.profile);
        Ok(&self.profile)
    }

    pub fn notifications(&self) -> NotificationSettings {
        self.notifications
    }

    pub fn update_notifications(&mut self, update: NotificationSettingsUpdate) -> NotificationSettings {
        update.apply_to(&mut self.notifications);
        self.notifications
    }

    pub fn privacy(&self) -> PrivacySettings {
        self.privacy
    }

    pub fn update_privacy(&mut self, update: PrivacySettingsUpdate) -> PrivacySettings {
        update.apply_to(&mut self.privacy);
        self.privacy
    }

    pub fn matching_on(&self) -> bool {
        self.matching_on
    }

    pub fn set_matching_on(&mut self, on: bool) {
        self.matching_on = on;
    }

    pub fn preferences(&self) -> Option<&MatchingPreferences> {
        self.preferences.as_ref()
    }

    pub fn save_preferences(&mut self, preferences: MatchingPreferences) {
        self.preferences = Some(preferences);
    }

    /// Back to the state the store was created in.
    pub fn reset(&mut self) {
        self.profile = self.default_profile.clone();
        self.notifications = self.default_notifications;
        self.privacy = PrivacySettings::default();
        self.matching_on = true;
        self.preferences = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DormError;
    use crate::models::{Gender, QUESTIONS};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn store() -> UserStore {
        let profile = UserProfile {
            id: "user-001".to_string(),
            name: "홍길동".to_string(),
            gender: Gender::Male,
            age: 22,
            grade: 3,
            bio: "안녕하세요".to_string(),
            profile_image: None,
            tags: vec!["깔끔함".to_string()],
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        UserStore::new(profile, NotificationSettings::default())
    }

    #[test]
    fn update_profile_merges_only_provided_fields() {
        let mut store = store();
        let before = store.profile().clone();

        let updated = store
            .update_profile(ProfileUpdate {
                bio: Some("새 자기소개".to_string()),
                grade: Some(4),
                ..Default::default()
            })
            .unwrap()
            .clone();

        assert_eq!(updated.bio, "새 자기소개");
        assert_eq!(updated.grade, 4);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.age, before.age);
        assert_eq!(updated.tags, before.tags);
    }

    #[test]
    fn invalid_update_is_rejected_without_changes() {
        let mut store = store();
        let before = store.profile().clone();

        let err = store
            .update_profile(ProfileUpdate {
                name: Some("새 이름".to_string()),
                grade: Some(0),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, DormError::Validation(_)));
        assert_eq!(store.profile(), &before);
    }

    #[test]
    fn bio_limit_counts_characters() {
        let mut store = store();
        let bio = "가".repeat(200);
        assert!(store
            .update_profile(ProfileUpdate {
                bio: Some(bio),
                ..Default::default()
            })
            .is_ok());
        assert!(store
            .update_profile(ProfileUpdate {
                bio: Some("가".repeat(201)),
                ..Default::default()
            })
            .is_err());
    }

    #[test]
    fn settings_merge() {
        let mut store = store();
        let notifications = store.update_notifications(NotificationSettingsUpdate {
            email_notification: Some(true),
            like_notification: Some(false),
            ..Default::default()
        });
        assert!(notifications.email_notification);
        assert!(!notifications.like_notification);
        assert!(notifications.match_notification);

        let privacy = store.update_privacy(PrivacySettingsUpdate {
            allow_messages: Some(false),
            ..Default::default()
        });
        assert!(!privacy.allow_messages);
        assert!(privacy.profile_public);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = store();
        let original = store.profile().clone();

        store
            .update_profile(ProfileUpdate {
                name: Some("임꺽정".to_string()),
                ..Default::default()
            })
            .unwrap();
        store.update_notifications(NotificationSettingsUpdate {
            match_notification: Some(false),
            ..Default::default()
        });
        store.set_matching_on(false);
        let answers: BTreeMap<u32, String> = QUESTIONS
            .iter()
            .map(|q| (q.id, q.options[1].to_string()))
            .collect();
        store.save_preferences(MatchingPreferences::from_answers(answers).unwrap());

        store.reset();

        assert_eq!(store.profile(), &original);
        assert_eq!(store.notifications(), NotificationSettings::default());
        assert_eq!(store.privacy(), PrivacySettings::default());
        assert!(store.matching_on());
        assert!(store.preferences().is_none());
    }
}
