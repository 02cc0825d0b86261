//! Profile request/response DTOs for the v1 API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{V1Gender, V1MatchOutcome};
use crate::models::{
    ActivityStats, MatchRecord, NotificationSettings, NotificationSettingsUpdate, Post,
    PrivacySettings, PrivacySettingsUpdate, ProfileUpdate, UserProfile,
};

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `PATCH /api/v1/profile`. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// 1-30 characters.
    pub name: Option<String>,
    pub gender: Option<V1Gender>,
    /// Must be positive.
    pub age: Option<u8>,
    /// Must be positive.
    pub grade: Option<u8>,
    /// At most 200 characters.
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            gender: req.gender.map(Into::into),
            age: req.age,
            grade: req.grade,
            bio: req.bio,
            profile_image: req.profile_image,
            tags: req.tags,
        }
    }
}

/// Request body for `PATCH /api/v1/profile/notifications`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationSettingsRequest {
    pub match_notification: Option<bool>,
    pub comment_notification: Option<bool>,
    pub like_notification: Option<bool>,
    pub message_notification: Option<bool>,
    pub email_notification: Option<bool>,
}

impl From<UpdateNotificationSettingsRequest> for NotificationSettingsUpdate {
    fn from(req: UpdateNotificationSettingsRequest) -> Self {
        Self {
            match_notification: req.match_notification,
            comment_notification: req.comment_notification,
            like_notification: req.like_notification,
            message_notification: req.message_notification,
            email_notification: req.email_notification,
        }
    }
}

/// Request body for `PATCH /api/v1/profile/privacy`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrivacySettingsRequest {
    pub profile_public: Option<bool>,
    pub show_match_history: Option<bool>,
    pub allow_messages: Option<bool>,
}

impl From<UpdatePrivacySettingsRequest> for PrivacySettingsUpdate {
    fn from(req: UpdatePrivacySettingsRequest) -> Self {
        Self {
            profile_public: req.profile_public,
            show_match_history: req.show_match_history,
            allow_messages: req.allow_messages,
        }
    }
}

/// Query parameters for `GET /api/v1/profile/posts`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    /// `mine` (default), `commented`, `liked` or `bookmarked`.
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub gender: V1Gender,
    pub age: u8,
    pub grade: u8,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub tags: Vec<String>,
    #[schema(value_type = String, format = Date)]
    pub created_at: NaiveDate,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            gender: profile.gender.into(),
            age: profile.age,
            grade: profile.grade,
            bio: profile.bio,
            profile_image: profile.profile_image,
            tags: profile.tags,
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsResponse {
    pub match_notification: bool,
    pub comment_notification: bool,
    pub like_notification: bool,
    pub message_notification: bool,
    pub email_notification: bool,
}

impl From<NotificationSettings> for NotificationSettingsResponse {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            match_notification: settings.match_notification,
            comment_notification: settings.comment_notification,
            like_notification: settings.like_notification,
            message_notification: settings.message_notification,
            email_notification: settings.email_notification,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettingsResponse {
    pub profile_public: bool,
    pub show_match_history: bool,
    pub allow_messages: bool,
}

impl From<PrivacySettings> for PrivacySettingsResponse {
    fn from(settings: PrivacySettings) -> Self {
        Self {
            profile_public: settings.profile_public,
            show_match_history: settings.show_match_history,
            allow_messages: settings.allow_messages,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatsResponse {
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_likes: usize,
    pub total_bookmarks: usize,
    /// Matched entries in the history.
    pub matching_count: usize,
    /// Waiting entries in the history.
    pub waiting_count: usize,
}

impl From<ActivityStats> for ActivityStatsResponse {
    fn from(stats: ActivityStats) -> Self {
        Self {
            total_posts: stats.total_posts,
            total_comments: stats.total_comments,
            total_likes: stats.total_likes,
            total_bookmarks: stats.total_bookmarks,
            matching_count: stats.matching_count,
            waiting_count: stats.waiting_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: u32,
    pub comments: u32,
    pub bookmarks: u32,
    #[schema(value_type = String, format = Date)]
    pub created_at: NaiveDate,
    pub author_id: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            category: post.category,
            likes: post.likes,
            comments: post.comments,
            bookmarks: post.bookmarks,
            created_at: post.created_at,
            author_id: post.author_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecordResponse {
    pub id: String,
    pub target_user_id: String,
    pub target_name: String,
    pub status: V1MatchOutcome,
    #[schema(value_type = String, format = Date)]
    pub created_at: NaiveDate,
}

impl From<MatchRecord> for MatchRecordResponse {
    fn from(record: MatchRecord) -> Self {
        Self {
            id: record.id,
            target_user_id: record.target_user_id,
            target_name: record.target_name,
            status: record.status.into(),
            created_at: record.created_at,
        }
    }
}
