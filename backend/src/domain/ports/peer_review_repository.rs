//! Port abstraction for the read-only peer review fixtures.
use async_trait::async_trait;

use crate::domain::PeerReview;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by peer review adapters.
    pub enum PeerReviewPersistenceError {
        /// The backing store could not be read.
        Read { message: String } => "peer review read failed: {message}",
    }
}

/// Read-only peer review collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeerReviewRepository: Send + Sync {
    /// All reviews in fixture order.
    async fn list(&self) -> Result<Vec<PeerReview>, PeerReviewPersistenceError>;

    /// Review carrying `id`.
    async fn find_by_id(&self, id: u64) -> Result<Option<PeerReview>, PeerReviewPersistenceError>;
}
