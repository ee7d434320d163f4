//! User Service Library
//!
//! Persistence for registered users: the [`UserRepository`] capability,
//! its SeaORM adapter and an in-memory fake for tests.

pub mod repository;

pub use repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{InMemoryUserRepository, MockUserRepository};
