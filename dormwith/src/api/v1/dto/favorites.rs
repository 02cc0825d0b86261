use serde::{Deserialize, Serialize};

use super::common::V1Gender;
use crate::models::FavoriteProfile;

/// A browse card that can be hearted. Used as the `POST /favorites:toggle`
/// body and in the favorites list.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteProfileDto {
    pub id: String,
    pub name: String,
    pub major: String,
    pub gender: V1Gender,
    pub dorm: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<FavoriteProfile> for FavoriteProfileDto {
    fn from(profile: FavoriteProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            major: profile.major,
            gender: profile.gender.into(),
            dorm: profile.dorm,
            tags: profile.tags,
        }
    }
}

impl From<FavoriteProfileDto> for FavoriteProfile {
    fn from(dto: FavoriteProfileDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            major: dto.major,
            gender: dto.gender.into(),
            dorm: dto.dorm,
            tags: dto.tags,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusResponse {
    pub profile_id: String,
    pub favorite: bool,
}
