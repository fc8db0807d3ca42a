//! User records: domain types, the repository seam and its in-memory store.

pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::{User, UserInput};
pub use memory::InMemoryUserStore;
pub use repository::UserRepository;
