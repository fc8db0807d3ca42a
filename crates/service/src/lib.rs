//! Service layer: the concurrent user store and its error type.
//! - `users::UserRepository` is the seam the HTTP layer talks to.
//! - `users::InMemoryUserStore` is the process-local implementation.

pub mod errors;
pub mod users;
