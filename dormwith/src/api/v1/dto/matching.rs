//! Matching request/response DTOs for the v1 API.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{StatusCountsResponse, V1Gender, V1MatchingStatus};
use crate::models::{MatchUser, MatchingPreferences, Question};

/// A candidate profile card.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchUserResponse {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: V1Gender,
    /// School year, starting at 1.
    pub grade: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub bio: String,
    pub tags: Vec<String>,
    /// Lifestyle compatibility in percent (0-100).
    pub compatibility: u8,
    #[schema(value_type = String, format = Date)]
    pub created_at: NaiveDate,
}

impl From<MatchUser> for MatchUserResponse {
    fn from(user: MatchUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            gender: user.gender.into(),
            grade: user.grade,
            profile_image: user.profile_image,
            bio: user.bio,
            tags: user.tags,
            compatibility: user.compatibility.value(),
            created_at: user.created_at,
        }
    }
}

/// A candidate plus the bucket it sits in.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchUserDetailResponse {
    pub user: MatchUserResponse,
    pub status: V1MatchingStatus,
}

/// Result of like, reject, accept or decline.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDecisionResponse {
    pub user_id: String,
    /// Bucket the user moved to.
    pub status: V1MatchingStatus,
    /// List sizes after the decision.
    pub counts: StatusCountsResponse,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: u32,
    pub title: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            title: question.title.to_string(),
            options: question.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Request body for `PUT /api/v1/matching/preferences`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavePreferencesRequest {
    /// Question id to chosen option. All ten questions must be answered.
    #[schema(value_type = Object)]
    pub answers: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    #[schema(value_type = Object)]
    pub answers: BTreeMap<u32, String>,
    /// First three answers joined with `" • "`.
    pub tags: String,
}

impl From<MatchingPreferences> for PreferencesResponse {
    fn from(preferences: MatchingPreferences) -> Self {
        Self {
            answers: preferences.answers,
            tags: preferences.tags,
        }
    }
}

/// Matching on/off switch, used for both request and response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSwitch {
    pub enabled: bool,
}
