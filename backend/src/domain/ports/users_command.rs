//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{CallerClaim, DeletionOutcome, Error, NewUser, User, UserId};

/// Write-side user use-cases.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a validated user and return the stored record.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Delete `target` on behalf of `caller`. Only self-deletion is allowed.
    async fn delete_user(
        &self,
        caller: &CallerClaim,
        target: UserId,
    ) -> Result<DeletionOutcome, Error>;
}
