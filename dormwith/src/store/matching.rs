//! Matching lifecycle for the current viewer.
//!
//! Every candidate id lives in at most one place at a time: one of the
//! `recommended`, `waiting`, `received` or `matched` lists, or the rejected id
//! list. Operations that would put an id in two places fail instead.

use crate::error::{DormError, Result};
use crate::models::{MatchUser, MatchingStatus, StatusCounts};

/// Source lists used by [`MatchingStore::initialize`].
#[derive(Debug, Clone, Default)]
pub struct MatchingSeed {
    pub recommended: Vec<MatchUser>,
    pub waiting: Vec<MatchUser>,
    pub received: Vec<MatchUser>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchingStore {
    recommended: Vec<MatchUser>,
    waiting: Vec<MatchUser>,
    received: Vec<MatchUser>,
    matched: Vec<MatchUser>,
    rejected_ids: Vec<String>,
}

impl MatchingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the three source lists with `seed` and forget every decision.
    pub fn initialize(&mut self, seed: MatchingSeed) {
        self.recommended = seed.recommended;
        self.waiting = seed.waiting;
        self.received = seed.received;
        self.matched.clear();
        self.rejected_ids.clear();
    }

    /// Show interest in a recommended candidate, moving it to `waiting`.
    ///
    /// Fails with `NotFound` when the id is not currently recommended; the
    /// store is left untouched in that case.
    pub fn like(&mut self, user_id: &str) -> Result<MatchUser> {
        let user = take(&mut self.recommended, user_id).ok_or_else(|| {
            DormError::NotFound(format!("User {user_id} is not in the recommended list"))
        })?;
        self.waiting.push(user.clone());
        Ok(user)
    }

    /// Pass on a candidate.
    ///
    /// Removes the id from `recommended` if present and records it as
    /// rejected. Ids that already sit in `waiting`, `received` or `matched`
    /// are refused with `Conflict`. Rejecting twice records the id once.
    pub fn reject(&mut self, user_id: &str) -> Result<()> {
        if let Some(status) = self.active_status(user_id) {
            return Err(DormError::Conflict(format!(
                "User {user_id} is already {status}"
            )));
        }

        take(&mut self.recommended, user_id);
        self.record_rejection(user_id);
        Ok(())
    }

    /// Accept a received request, moving it to `matched`.
    pub fn accept(&mut self, user_id: &str) -> Result<MatchUser> {
        let user = take(&mut self.received, user_id).ok_or_else(|| {
            DormError::NotFound(format!("No received request from user {user_id}"))
        })?;
        self.matched.push(user.clone());
        Ok(user)
    }

    /// Decline a received request and record the id as rejected.
    pub fn decline(&mut self, user_id: &str) -> Result<()> {
        take(&mut self.received, user_id).ok_or_else(|| {
            DormError::NotFound(format!("No received request from user {user_id}"))
        })?;
        self.record_rejection(user_id);
        Ok(())
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts {
            waiting: self.waiting.len(),
            received: self.received.len(),
            matched: self.matched.len(),
        }
    }

    /// Bucket an id currently lives in, if any.
    pub fn status_of(&self, user_id: &str) -> Option<MatchingStatus> {
        if contains(&self.recommended, user_id) {
            return Some(MatchingStatus::Recommended);
        }
        if self.rejected_ids.iter().any(|id| id == user_id) {
            return Some(MatchingStatus::Rejected);
        }
        self.active_status(user_id)
    }

    /// Look a candidate record up in any list.
    pub fn find(&self, user_id: &str) -> Option<(&MatchUser, MatchingStatus)> {
        [
            (&self.recommended, MatchingStatus::Recommended),
            (&self.waiting, MatchingStatus::Waiting),
            (&self.received, MatchingStatus::Received),
            (&self.matched, MatchingStatus::Matched),
        ]
        .into_iter()
        .find_map(|(list, status)| {
            list.iter()
                .find(|u| u.id == user_id)
                .map(|user| (user, status))
        })
    }

    pub fn recommended(&self) -> &[MatchUser] {
        &self.recommended
    }

    pub fn waiting(&self) -> &[MatchUser] {
        &self.waiting
    }

    pub fn received(&self) -> &[MatchUser] {
        &self.received
    }

    pub fn matched(&self) -> &[MatchUser] {
        &self.matched
    }

    pub fn rejected_ids(&self) -> &[String] {
        &self.rejected_ids
    }

    fn active_status(&self, user_id: &str) -> Option<MatchingStatus> {
        if contains(&self.waiting, user_id) {
            Some(MatchingStatus::Waiting)
        } else if contains(&self.received, user_id) {
            Some(MatchingStatus::Received)
        } else if contains(&self.matched, user_id) {
            Some(MatchingStatus::Matched)
        } else {
            None
        }
    }

    fn record_rejection(&mut self, user_id: &str) {
        if !self.rejected_ids.iter().any(|id| id == user_id) {
            self.rejected_ids.push(user_id.to_string());
        }
    }
}

fn contains(list: &[MatchUser], user_id: &str) -> bool {
    list.iter().any(|u| u.id == user_id)
}

fn take(list: &mut Vec<MatchUser>, user_id: &str) -> Option<MatchUser> {
    let pos = list.iter().position(|u| u.id == user_id)?;
    Some(list.remove(pos))
}
