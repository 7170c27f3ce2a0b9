//! User collection keyed by id.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId, UserType};

#[derive(Debug)]
struct UserStore {
    users: BTreeMap<UserId, User>,
    next_id: u64,
}

/// Users held in a [`BTreeMap`].
///
/// Ids come from a counter that starts after the largest seeded id and only
/// moves forward, so ordering by id is insertion order and deleted ids are
/// never handed out again.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<UserStore>,
}

impl InMemoryUserRepository {
    /// Empty repository; the first user receives id 1.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Repository seeded with `users`, keeping their ids.
    pub fn with_users(users: Vec<User>) -> Self {
        let users: BTreeMap<UserId, User> = users.into_iter().map(|u| (u.id(), u)).collect();
        let next_id = users
            .keys()
            .next_back()
            .map_or(1, |id| id.get().saturating_add(1));
        Self {
            store: Mutex::new(UserStore { users, next_id }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserStore>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|err| UserPersistenceError::lock(err.to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let id = UserId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(UserPersistenceError::ids_exhausted)?;
        let stored = User::new(id, user);
        store.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn list(&self, filter: Option<UserType>) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .users
            .values()
            .filter(|u| filter.is_none_or(|t| u.user_type() == t))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.remove(&id))
    }
}
