use std::sync::Arc;

use service::users::UserRepository;

/// Shared router state: a handle to the one user store of this process.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
