//! Port abstraction for the user collection and its errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserType};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The collection lock was poisoned by a panicking writer.
        Lock { message: String } => "user repository lock poisoned: {message}",
        /// The id sequence cannot produce another value.
        IdsExhausted => "user id sequence exhausted",
    }
}

/// Id-keyed user collection.
///
/// Absent users are reported as `Ok(None)`, never as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next id of a sequence that never goes
    /// backwards, and return the stored record.
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// All users in insertion order, optionally restricted to one type.
    async fn list(&self, filter: Option<UserType>) -> Result<Vec<User>, UserPersistenceError>;

    /// Remove a user, returning the removed record.
    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
