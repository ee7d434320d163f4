//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entities validate themselves on construction; persistence lives in the
//! service crates behind repository traits.

pub mod clock;
pub mod constants;
pub mod error;
pub mod pagination;
pub mod password;
pub mod product;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use pagination::{PageRequest, SortOrder};
pub use password::Password;
pub use product::Product;
pub use user::User;
