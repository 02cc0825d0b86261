use std::sync::{Arc, Mutex};

use chrono::Utc;
use nanoid::nanoid;
use validator::Validate;

use crate::catalog::Catalog;
use crate::error::{DormError, Result};
use crate::models::{Faq, Inquiry, NewInquiry, Policy, BOARD_CATEGORIES, PROFILE_TAGS};

/// FAQ category that stands for "no filter".
const ALL_CATEGORIES: &str = "전체";

/// Help content, legal text and support inquiries.
#[derive(Clone)]
pub struct ContentService {
    catalog: Arc<dyn Catalog>,
    inquiries: Arc<Mutex<Vec<Inquiry>>>,
}

impl ContentService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            inquiries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// FAQs, optionally narrowed to one category.
    pub fn faqs(&self, category: Option<&str>) -> Result<Vec<Faq>> {
        let faqs = self.catalog.faqs()?;
        Ok(match category.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => faqs,
            Some(category) => faqs.into_iter().filter(|f| f.category == category).collect(),
        })
    }

    pub fn policies(&self) -> Result<Vec<Policy>> {
        self.catalog.policies()
    }

    pub fn policy(&self, id: &str) -> Result<Policy> {
        self.catalog
            .policies()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DormError::NotFound(format!("Policy not found: {id}")))
    }

    pub fn board_categories(&self) -> Vec<String> {
        BOARD_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    pub fn profile_tags(&self) -> Vec<String> {
        PROFILE_TAGS.iter().map(|t| t.to_string()).collect()
    }

    /// Record a support inquiry. Title and content are stored trimmed.
    pub fn submit_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        inquiry.validate()?;

        let stored = Inquiry {
            id: nanoid!(),
            category: inquiry.category,
            title: inquiry.title.trim().to_string(),
            content: inquiry.content.trim().to_string(),
            created_at: Utc::now(),
        };
        self.inquiries.lock()?.push(stored.clone());

        tracing::info!(
            inquiry_id = %stored.id,
            category = %stored.category,
            "Inquiry submitted"
        );
        Ok(stored)
    }

    /// Submitted inquiries, oldest first.
    pub fn inquiries(&self) -> Result<Vec<Inquiry>> {
        Ok(self.inquiries.lock()?.clone())
    }
}
