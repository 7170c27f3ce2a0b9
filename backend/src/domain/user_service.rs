//! User service implementing the user driving ports.
//!
//! Composes repository calls with the access decisions and translates absent
//! records, denials and adapter failures into [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::access::{decide_delete_user, decide_list_users};
use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{CallerClaim, DeletionOutcome, Error, NewUser, User, UserId, UserType};

/// Message returned when a caller may not read the user list.
pub const LIST_FORBIDDEN_MESSAGE: &str =
    "Access denied: missing permissions to access the resource";
/// Message returned when a caller may not delete a user.
pub const DELETE_FORBIDDEN_MESSAGE: &str =
    "Access denied: missing permissions to delete the resource.";
/// Message returned for an unrecognised user type filter.
pub const LIST_NOT_FOUND_MESSAGE: &str = "Error while retrieving the user list";
/// Message returned after a successful deletion.
pub const DELETE_SUCCESS_MESSAGE: &str = "Deletion completed successfully.";

/// User service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserService<R> {
    users: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(err: UserPersistenceError) -> Error {
        error!(error = %err, "user repository failure");
        Error::internal(format!("user repository error: {err}"))
    }

    async fn stored_caller(&self, claim: &CallerClaim) -> Result<Option<User>, Error> {
        match claim.user_id() {
            Some(id) => self
                .users
                .find_by_id(id)
                .await
                .map_err(Self::map_persistence_error),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(
        &self,
        caller: &CallerClaim,
        type_filter: Option<&str>,
    ) -> Result<Vec<User>, Error> {
        let stored = self.stored_caller(caller).await?;
        if let Err(reason) = decide_list_users(caller, stored.as_ref()).into_result() {
            warn!(%reason, "user list denied");
            return Err(Error::forbidden(LIST_FORBIDDEN_MESSAGE));
        }

        let filter = type_filter
            .map(str::parse::<UserType>)
            .transpose()
            .map_err(|err| {
                warn!(error = %err, "unrecognised user type filter");
                Error::not_found(LIST_NOT_FOUND_MESSAGE)
            })?;

        self.users
            .list(filter)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let stored = self
            .users
            .insert(user)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %stored.id(), user_type = %stored.user_type(), "user created");
        Ok(stored)
    }

    async fn delete_user(
        &self,
        caller: &CallerClaim,
        target: UserId,
    ) -> Result<DeletionOutcome, Error> {
        let stored = self.stored_caller(caller).await?;
        if let Err(reason) = decide_delete_user(caller, stored.as_ref(), target).into_result() {
            warn!(%reason, target = %target, "user deletion denied");
            return Err(Error::forbidden(DELETE_FORBIDDEN_MESSAGE));
        }

        match self
            .users
            .delete_by_id(target)
            .await
            .map_err(Self::map_persistence_error)?
        {
            Some(removed) => {
                info!(user_id = %removed.id(), "user deleted");
                Ok(DeletionOutcome::deleted(DELETE_SUCCESS_MESSAGE))
            }
            None => Err(Error::not_found(format!("user {target} not found"))),
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
