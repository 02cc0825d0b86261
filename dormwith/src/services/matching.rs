use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::error::{DormError, Result};
use crate::models::{MatchUser, MatchingStatus, StatusCounts};
use crate::store::{MatchingSeed, MatchingStore};

/// Shared handle over the viewer's [`MatchingStore`].
///
/// Clones share one store. Each call takes the lock once.
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<Mutex<MatchingStore>>,
    catalog: Arc<dyn Catalog>,
}

impl MatchingService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            store: Arc::new(Mutex::new(MatchingStore::new())),
            catalog,
        }
    }

    /// Reload the candidate lists from the catalog and forget past decisions.
    pub fn initialize(&self) -> Result<StatusCounts> {
        let seed = MatchingSeed {
            recommended: self.catalog.recommended_users()?,
            waiting: self.catalog.waiting_matches()?,
            received: self.catalog.received_requests()?,
        };
        let recommended = seed.recommended.len();

        let mut store = self.store.lock()?;
        store.initialize(seed);
        let counts = store.status_counts();

        tracing::info!(
            catalog = self.catalog.name(),
            recommended,
            waiting = counts.waiting,
            received = counts.received,
            "Matching lists initialized"
        );
        Ok(counts)
    }

    pub fn status_counts(&self) -> Result<StatusCounts> {
        Ok(self.store.lock()?.status_counts())
    }

    pub fn recommended(&self) -> Result<Vec<MatchUser>> {
        Ok(self.store.lock()?.recommended().to_vec())
    }

    pub fn waiting(&self) -> Result<Vec<MatchUser>> {
        Ok(self.store.lock()?.waiting().to_vec())
    }

    pub fn received(&self) -> Result<Vec<MatchUser>> {
        Ok(self.store.lock()?.received().to_vec())
    }

    pub fn matched(&self) -> Result<Vec<MatchUser>> {
        Ok(self.store.lock()?.matched().to_vec())
    }

    /// Candidate record plus the bucket it currently sits in.
    pub fn user(&self, user_id: &str) -> Result<(MatchUser, MatchingStatus)> {
        let store = self.store.lock()?;
        store
            .find(user_id)
            .map(|(user, status)| (user.clone(), status))
            .ok_or_else(|| DormError::NotFound(format!("User not found: {user_id}")))
    }

    /// A candidate the viewer is waiting on.
    pub fn waiting_user(&self, user_id: &str) -> Result<MatchUser> {
        match self.user(user_id)? {
            (user, MatchingStatus::Waiting) => Ok(user),
            (_, status) => Err(DormError::NotFound(format!(
                "User {user_id} is {status}, not waiting"
            ))),
        }
    }

    pub fn like(&self, user_id: &str) -> Result<MatchUser> {
        let liked = self.store.lock()?.like(user_id)?;
        tracing::debug!(user_id, "Liked recommended user");
        Ok(liked)
    }

    pub fn reject(&self, user_id: &str) -> Result<()> {
        self.store.lock()?.reject(user_id)?;
        tracing::debug!(user_id, "Rejected user");
        Ok(())
    }

    pub fn accept(&self, user_id: &str) -> Result<MatchUser> {
        let accepted = self.store.lock()?.accept(user_id)?;
        tracing::info!(user_id, "Accepted matching request");
        Ok(accepted)
    }

    pub fn decline(&self, user_id: &str) -> Result<()> {
        self.store.lock()?.decline(user_id)?;
        tracing::debug!(user_id, "Declined matching request");
        Ok(())
    }
}
