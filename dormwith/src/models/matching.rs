use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Gender;
use crate::error::DormError;

/// Compatibility score between the viewer and a candidate, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Compatibility(u8);

impl Compatibility {
    pub const MAX: u8 = 100;

    /// Builds a score, clamping anything outside `0..=100`.
    pub fn new(score: i64) -> Self {
        Self(score.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for Compatibility {
    fn from(score: i64) -> Self {
        Self::new(score)
    }
}

impl From<Compatibility> for u8 {
    fn from(score: Compatibility) -> Self {
        score.0
    }
}

/// Unvalidated candidate profile as it arrives from a catalog or request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMatchUser {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(range(min = 1))]
    pub age: u8,
    pub gender: Gender,
    #[validate(range(min = 1))]
    pub grade: u8,
    pub profile_image: Option<String>,
    #[validate(length(max = 200))]
    pub bio: String,
    pub tags: Vec<String>,
    pub compatibility: i64,
    pub created_at: NaiveDate,
}

/// A candidate profile shown in the matching flow.
///
/// Only constructed through [`TryFrom<NewMatchUser>`], so `grade` and `age`
/// are positive and `compatibility` is in range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchUser {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub grade: u8,
    pub profile_image: Option<String>,
    pub bio: String,
    pub tags: Vec<String>,
    pub compatibility: Compatibility,
    pub created_at: NaiveDate,
}

impl TryFrom<NewMatchUser> for MatchUser {
    type Error = DormError;

    fn try_from(draft: NewMatchUser) -> Result<Self, Self::Error> {
        draft.validate()?;

        Ok(Self {
            id: draft.id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            grade: draft.grade,
            profile_image: draft.profile_image,
            bio: draft.bio,
            tags: draft.tags,
            compatibility: Compatibility::new(draft.compatibility),
            created_at: draft.created_at,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub waiting: usize,
    pub received: usize,
    pub matched: usize,
}

/// A "hearted" profile card. Independent of the matching lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FavoriteProfile {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub major: String,
    pub gender: Gender,
    pub dorm: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewMatchUser {
        NewMatchUser {
            id: "match-101".to_string(),
            name: "김서연".to_string(),
            age: 21,
            gender: Gender::Female,
            grade: 2,
            profile_image: None,
            bio: "조용하고 깔끔한 룸메이트를 찾아요.".to_string(),
            tags: vec!["아침형".to_string(), "깔끔함".to_string()],
            compatibility: 87,
            created_at: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        }
    }

    #[test]
    fn compatibility_is_clamped() {
        assert_eq!(Compatibility::new(150).value(), 100);
        assert_eq!(Compatibility::new(-20).value(), 0);
        assert_eq!(Compatibility::new(64).value(), 64);
    }

    #[test]
    fn compatibility_deserialization_clamps() {
        let score: Compatibility = serde_json::from_str("250").unwrap();
        assert_eq!(score.value(), 100);
        assert_eq!(serde_json::to_value(score).unwrap(), 100);
    }

    #[test]
    fn try_from_clamps_out_of_range_compatibility() {
        let mut d = draft();
        d.compatibility = 130;
        let user = MatchUser::try_from(d).unwrap();
        assert_eq!(user.compatibility.value(), 100);
    }

    #[test]
    fn try_from_rejects_zero_grade() {
        let mut d = draft();
        d.grade = 0;
        let err = MatchUser::try_from(d).unwrap_err();
        assert!(matches!(err, DormError::Validation(msg) if msg.contains("grade")));
    }

    #[test]
    fn try_from_rejects_empty_name() {
        let mut d = draft();
        d.name = String::new();
        assert!(MatchUser::try_from(d).is_err());
    }

    #[test]
    fn try_from_keeps_fields() {
        let user = MatchUser::try_from(draft()).unwrap();
        assert_eq!(user.id, "match-101");
        assert_eq!(user.grade, 2);
        assert_eq!(user.compatibility.value(), 87);
        assert_eq!(user.tags.len(), 2);
    }
}
