//! Shared DTO types used across multiple v1 API endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{Gender, MatchOutcome, MatchingStatus, MessageKind, StatusCounts};

/// Wire format: `"남성"` or `"여성"`. `"남자"` and `"여자"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum V1Gender {
    #[serde(rename = "남성", alias = "남자")]
    Male,
    #[serde(rename = "여성", alias = "여자")]
    Female,
}

impl From<Gender> for V1Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => V1Gender::Male,
            Gender::Female => V1Gender::Female,
        }
    }
}

impl From<V1Gender> for Gender {
    fn from(gender: V1Gender) -> Self {
        match gender {
            V1Gender::Male => Gender::Male,
            V1Gender::Female => Gender::Female,
        }
    }
}

/// Matching bucket.
///
/// Wire format: `"recommended"`, `"waiting"`, `"received"`, `"matched"` or
/// `"rejected"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum V1MatchingStatus {
    Recommended,
    Waiting,
    Received,
    Matched,
    Rejected,
}

impl From<MatchingStatus> for V1MatchingStatus {
    fn from(status: MatchingStatus) -> Self {
        match status {
            MatchingStatus::Recommended => V1MatchingStatus::Recommended,
            MatchingStatus::Waiting => V1MatchingStatus::Waiting,
            MatchingStatus::Received => V1MatchingStatus::Received,
            MatchingStatus::Matched => V1MatchingStatus::Matched,
            MatchingStatus::Rejected => V1MatchingStatus::Rejected,
        }
    }
}

/// Outcome of a past match, as shown in the history screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum V1MatchOutcome {
    Matched,
    Rejected,
    Waiting,
}

impl From<MatchOutcome> for V1MatchOutcome {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Matched => V1MatchOutcome::Matched,
            MatchOutcome::Rejected => V1MatchOutcome::Rejected,
            MatchOutcome::Waiting => V1MatchOutcome::Waiting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum V1MessageType {
    Text,
    Image,
    File,
    Voice,
}

impl From<MessageKind> for V1MessageType {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Text => V1MessageType::Text,
            MessageKind::Image => V1MessageType::Image,
            MessageKind::File => V1MessageType::File,
            MessageKind::Voice => V1MessageType::Voice,
        }
    }
}

/// Sizes of the viewer's matching lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountsResponse {
    pub waiting: usize,
    pub received: usize,
    pub matched: usize,
}

impl From<StatusCounts> for StatusCountsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            waiting: counts.waiting,
            received: counts.received,
            matched: counts.matched,
        }
    }
}
