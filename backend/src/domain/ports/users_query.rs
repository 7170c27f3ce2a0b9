//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{CallerClaim, Error, User, UserId};

/// Read-side user use-cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// List users visible to `caller`, optionally filtered by a raw user type
    /// taken from the query string.
    ///
    /// Access is checked before the filter is parsed; an unrecognised filter
    /// yields `NotFound`.
    async fn list_users(
        &self,
        caller: &CallerClaim,
        type_filter: Option<&str>,
    ) -> Result<Vec<User>, Error>;

    /// Fetch one user or fail with `NotFound`.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
