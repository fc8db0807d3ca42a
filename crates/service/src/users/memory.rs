use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::users::domain::{User, UserInput};
use crate::users::repository::UserRepository;

/// Map and id counter, always locked together.
struct Records {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl Records {
    fn new() -> Self {
        Self { users: HashMap::new(), next_id: 1 }
    }

    /// The single existence check shared by get/update/delete.
    fn lookup(&self, id: i64) -> Result<&User, ServiceError> {
        self.users.get(&id).ok_or(ServiceError::NotFound(id))
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local user store guarded by one lock.
///
/// Writers (create/update/delete) take the write guard, readers the read guard,
/// so mutations are totally ordered and a reader never sees half of one.
/// Ids start at 1 and are never handed out twice, even after a delete.
pub struct InMemoryUserStore {
    inner: RwLock<Records>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(Records::new()) }
    }

    /// Empty store behind an `Arc`, ready to be shared with the router.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        let records = self.inner.read().await;
        let mut users: Vec<User> = records.users.values().cloned().collect();
        drop(records);
        users.sort_by_key(|u| u.id);
        users
    }

    #[instrument(level = "debug", skip(self, input))]
    async fn create(&self, input: UserInput) -> User {
        let mut records = self.inner.write().await;
        let id = records.allocate_id();
        let user = input.into_user(id);
        records.users.insert(id, user.clone());
        debug!(id, "user stored");
        user
    }

    async fn get(&self, id: i64) -> Result<User, ServiceError> {
        let records = self.inner.read().await;
        records.lookup(id).cloned()
    }

    #[instrument(level = "debug", skip(self, input))]
    async fn update(&self, id: i64, input: UserInput) -> Result<User, ServiceError> {
        let mut records = self.inner.write().await;
        records.lookup(id)?;
        let user = input.into_user(id);
        records.users.insert(id, user.clone());
        debug!("user replaced");
        Ok(user)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut records = self.inner.write().await;
        records.lookup(id)?;
        records.users.remove(&id);
        debug!("user removed");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }
}
