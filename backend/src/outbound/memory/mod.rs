//! In-process user store used when no database is configured.
//!
//! Records live in a `BTreeMap` so listing is ordered by identifier, matching
//! the PostgreSQL adapter. Identifiers start at 1 and never repeat, even when
//! a caller stores an explicit identifier ahead of the counter.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserId};

#[derive(Debug)]
struct Store {
    records: BTreeMap<UserId, UserDetails>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Mutex-guarded [`UserRepository`] kept in memory.
///
/// # Examples
/// ```
/// use user_registration::domain::ports::UserRepository;
/// use user_registration::domain::UserDetails;
/// use user_registration::outbound::memory::InMemoryUserRepository;
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .expect("runtime");
/// let repo = InMemoryUserRepository::default();
/// let user = runtime
///     .block_on(repo.save(None, &UserDetails::default()))
///     .expect("saved");
/// assert_eq!(user.id().as_i64(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .map(|(id, details)| User::new(*id, details.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .records
            .get(&id)
            .map(|details| User::new(id, details.clone())))
    }

    async fn save(
        &self,
        id: Option<UserId>,
        details: &UserDetails,
    ) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let id = match id {
            Some(id) => {
                store.next_id = store.next_id.max(id.as_i64().saturating_add(1));
                id
            }
            None => {
                let id = UserId::new(store.next_id);
                store.next_id = store.next_id.saturating_add(1);
                id
            }
        };
        store.records.insert(id, details.clone());
        Ok(User::new(id, details.clone()))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut store = self.lock()?;
        store.records.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PinCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn details() -> UserDetails {
        UserDetails {
            first_name: "Saba".into(),
            surname: "Shaikh".into(),
            address: "Mumbai".into(),
            pin_code: PinCode::new("400018"),
            ..UserDetails::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn assigns_sequential_ids(details: UserDetails) {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(None, &details).await.expect("first save");
        let second = repo.save(None, &details).await.expect("second save");

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn explicit_ids_advance_the_counter(details: UserDetails) {
        let repo = InMemoryUserRepository::new();

        repo.save(Some(UserId::new(7)), &details)
            .await
            .expect("explicit save");
        let next = repo.save(None, &details).await.expect("generated save");

        assert_eq!(next.id(), UserId::new(8));
    }

    #[rstest]
    #[tokio::test]
    async fn save_with_id_replaces_record(details: UserDetails) {
        let repo = InMemoryUserRepository::new();
        let user = repo.save(None, &details).await.expect("save");
        let replacement = UserDetails {
            address: "Pune".into(),
            ..details
        };

        repo.save(Some(user.id()), &replacement)
            .await
            .expect("replace");

        let stored = repo
            .find_by_id(user.id())
            .await
            .expect("lookup")
            .expect("record present");
        assert_eq!(stored.details().address, "Pune");
        assert_eq!(repo.find_all().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn lists_in_id_order(details: UserDetails) {
        let repo = InMemoryUserRepository::new();
        for id in [3, 1, 2] {
            repo.save(Some(UserId::new(id)), &details)
                .await
                .expect("save");
        }

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|user| user.id().as_i64())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_record_and_ignores_unknown_ids(details: UserDetails) {
        let repo = InMemoryUserRepository::new();
        let user = repo.save(None, &details).await.expect("save");

        repo.delete_by_id(user.id()).await.expect("delete");
        repo.delete_by_id(UserId::new(99))
            .await
            .expect("unknown delete is a no-op");

        assert!(repo.find_by_id(user.id()).await.expect("lookup").is_none());
    }
}
