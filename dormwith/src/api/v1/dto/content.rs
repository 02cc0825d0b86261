//! Help-center DTOs for the v1 API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Faq, Inquiry, InquiryCategory, NewInquiry, Policy};

/// Query parameters for `GET /api/v1/content/faqs`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListFaqsQuery {
    /// Exact category such as `매칭`. `전체` or absent returns every FAQ.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqResponse {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            category: faq.category,
            question: faq.question,
            answer: faq.answer,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    /// `terms`, `privacy` or `service`.
    pub id: String,
    pub title: String,
    #[schema(value_type = String, format = Date)]
    pub last_updated: NaiveDate,
    pub content: String,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id,
            title: policy.title,
            last_updated: policy.last_updated,
            content: policy.content,
        }
    }
}

/// Inquiry topic. Wire format is the Korean label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum V1InquiryCategory {
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

impl From<V1InquiryCategory> for InquiryCategory {
    fn from(category: V1InquiryCategory) -> Self {
        match category {
            V1InquiryCategory::General => InquiryCategory::General,
            V1InquiryCategory::Matching => InquiryCategory::Matching,
            V1InquiryCategory::Board => InquiryCategory::Board,
            V1InquiryCategory::Technical => InquiryCategory::Technical,
            V1InquiryCategory::Other => InquiryCategory::Other,
        }
    }
}

impl From<InquiryCategory> for V1InquiryCategory {
    fn from(category: InquiryCategory) -> Self {
        match category {
            InquiryCategory::General => V1InquiryCategory::General,
            InquiryCategory::Matching => V1InquiryCategory::Matching,
            InquiryCategory::Board => V1InquiryCategory::Board,
            InquiryCategory::Technical => V1InquiryCategory::Technical,
            InquiryCategory::Other => V1InquiryCategory::Other,
        }
    }
}

/// Request body for `POST /api/v1/content/inquiries`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    #[serde(default)]
    pub category: V1InquiryCategory,
    /// Up to 100 characters, not blank.
    pub title: String,
    /// Up to 2000 characters, not blank.
    pub content: String,
}

impl From<CreateInquiryRequest> for NewInquiry {
    fn from(req: CreateInquiryRequest) -> Self {
        Self {
            category: req.category.into(),
            title: req.title,
            content: req.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    /// nanoid, 21 characters.
    pub id: String,
    pub category: V1InquiryCategory,
    pub title: String,
    pub content: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            category: inquiry.category.into(),
            title: inquiry.title,
            content: inquiry.content,
            created_at: inquiry.created_at,
        }
    }
}
