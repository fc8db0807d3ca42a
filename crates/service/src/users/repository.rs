use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::users::domain::{User, UserInput};

/// Storage abstraction for user records.
/// Every operation is atomic with respect to every other one on the same store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all live records, ordered by id.
    async fn list(&self) -> Vec<User>;
    /// Allocate the next id and store the record under it.
    async fn create(&self, input: UserInput) -> User;
    async fn get(&self, id: i64) -> Result<User, ServiceError>;
    /// Replace the record wholesale; the stored id is always `id`.
    async fn update(&self, id: i64, input: UserInput) -> Result<User, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
    /// Number of live records.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
