//! Read-only peer review collection.

use async_trait::async_trait;

use crate::domain::PeerReview;
use crate::domain::ports::{PeerReviewPersistenceError, PeerReviewRepository};

/// Peer reviews fixed at construction. No lock: nothing writes to it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPeerReviewRepository {
    reviews: Vec<PeerReview>,
}

impl InMemoryPeerReviewRepository {
    /// Repository serving `reviews` in the given order.
    pub fn new(reviews: Vec<PeerReview>) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl PeerReviewRepository for InMemoryPeerReviewRepository {
    async fn list(&self) -> Result<Vec<PeerReview>, PeerReviewPersistenceError> {
        Ok(self.reviews.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<PeerReview>, PeerReviewPersistenceError> {
        Ok(self.reviews.iter().find(|r| r.id == id).cloned())
    }
}
