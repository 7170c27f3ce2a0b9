//! Driving port for peer review reads.

use async_trait::async_trait;

use crate::domain::{Error, PeerReview};

/// Read-side peer review use-cases.
#[async_trait]
pub trait PeerReviewsQuery: Send + Sync {
    /// Every review.
    async fn list_peer_reviews(&self) -> Result<Vec<PeerReview>, Error>;

    /// Fetch a review by id or fail with `NotFound`.
    async fn get_peer_review(&self, id: u64) -> Result<PeerReview, Error>;
}
