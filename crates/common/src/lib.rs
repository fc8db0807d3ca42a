//! Shared building blocks for the user store workspace:
//! wire types reused by the HTTP layer and tracing setup.

pub mod types;
pub mod utils;
