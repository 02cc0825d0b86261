use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Category filters offered on the board tab.
pub const BOARD_CATEGORIES: &[&str] = &["전체", "자유", "정보", "질문", "룸메이트"];

/// Tags a viewer can pick for their own profile.
pub const PROFILE_TAGS: &[&str] = &[
    "깔끔함", "조용함", "아침형", "밤형", "친절함", "활발함", "성실함", "배려심",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub last_updated: NaiveDate,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InquiryCategory {
    #[default]
    #[serde(rename = "일반")]
    General,
    #[serde(rename = "매칭")]
    Matching,
    #[serde(rename = "게시판")]
    Board,
    #[serde(rename = "기술 문제")]
    Technical,
    #[serde(rename = "기타")]
    Other,
}

impl std::fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "일반"),
            Self::Matching => write!(f, "매칭"),
            Self::Board => write!(f, "게시판"),
            Self::Technical => write!(f, "기술 문제"),
            Self::Other => write!(f, "기타"),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInquiry {
    #[serde(default)]
    pub category: InquiryCategory,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 2000))]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    pub id: String,
    pub category: InquiryCategory,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
