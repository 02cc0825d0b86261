use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Gender, MatchOutcome};

/// The local viewer's own profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub grade: u8,
    pub bio: String,
    pub profile_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(range(min = 1))]
    pub age: Option<u8>,
    #[validate(range(min = 1))]
    pub grade: Option<u8>,
    #[validate(length(max = 200))]
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.age.is_none()
            && self.grade.is_none()
            && self.bio.is_none()
            && self.profile_image.is_none()
            && self.tags.is_none()
    }

    /// Shallow-merge the provided fields into `profile`.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(grade) = self.grade {
            profile.grade = grade;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(image) = self.profile_image {
            profile.profile_image = Some(image);
        }
        if let Some(tags) = self.tags {
            profile.tags = tags;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub match_notification: bool,
    pub comment_notification: bool,
    pub like_notification: bool,
    pub message_notification: bool,
    pub email_notification: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            match_notification: true,
            comment_notification: true,
            like_notification: true,
            message_notification: true,
            email_notification: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NotificationSettingsUpdate {
    pub match_notification: Option<bool>,
    pub comment_notification: Option<bool>,
    pub like_notification: Option<bool>,
    pub message_notification: Option<bool>,
    pub email_notification: Option<bool>,
}

impl NotificationSettingsUpdate {
    pub fn apply_to(self, settings: &mut NotificationSettings) {
        if let Some(v) = self.match_notification {
            settings.match_notification = v;
        }
        if let Some(v) = self.comment_notification {
            settings.comment_notification = v;
        }
        if let Some(v) = self.like_notification {
            settings.like_notification = v;
        }
        if let Some(v) = self.message_notification {
            settings.message_notification = v;
        }
        if let Some(v) = self.email_notification {
            settings.email_notification = v;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub show_match_history: bool,
    pub allow_messages: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_public: true,
            show_match_history: true,
            allow_messages: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PrivacySettingsUpdate {
    pub profile_public: Option<bool>,
    pub show_match_history: Option<bool>,
    pub allow_messages: Option<bool>,
}

impl PrivacySettingsUpdate {
    pub fn apply_to(self, settings: &mut PrivacySettings) {
        if let Some(v) = self.profile_public {
            settings.profile_public = v;
        }
        if let Some(v) = self.show_match_history {
            settings.show_match_history = v;
        }
        if let Some(v) = self.allow_messages {
            settings.allow_messages = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: u32,
    pub comments: u32,
    pub bookmarks: u32,
    pub created_at: NaiveDate,
    pub author_id: String,
}

/// One entry of the match history or the interest list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub target_user_id: String,
    pub target_name: String,
    pub status: MatchOutcome,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActivityStats {
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_likes: usize,
    pub total_bookmarks: usize,
    pub matching_count: usize,
    pub waiting_count: usize,
}
