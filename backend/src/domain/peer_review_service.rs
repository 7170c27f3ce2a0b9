//! Read-only peer review service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{PeerReviewPersistenceError, PeerReviewRepository, PeerReviewsQuery};
use crate::domain::{Error, PeerReview};

/// Peer review service backed by a [`PeerReviewRepository`].
#[derive(Clone)]
pub struct PeerReviewService<P> {
    reviews: Arc<P>,
}

impl<P> PeerReviewService<P> {
    /// Create a new service over the given repository.
    pub fn new(reviews: Arc<P>) -> Self {
        Self { reviews }
    }
}

fn map_persistence_error(err: PeerReviewPersistenceError) -> Error {
    error!(error = %err, "peer review repository failure");
    Error::internal(format!("peer review repository error: {err}"))
}

#[async_trait]
impl<P> PeerReviewsQuery for PeerReviewService<P>
where
    P: PeerReviewRepository,
{
    async fn list_peer_reviews(&self) -> Result<Vec<PeerReview>, Error> {
        self.reviews.list().await.map_err(map_persistence_error)
    }

    async fn get_peer_review(&self, id: u64) -> Result<PeerReview, Error> {
        self.reviews
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("peer review {id} not found")))
    }
}
