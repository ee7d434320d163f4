//! Auth Service Library
//!
//! Registration and login use cases plus JWT issuance. Users are stored
//! through the `UserRepository` capability from `user-service`.

pub mod token;
pub mod usecase;

pub use token::{Claims, TokenIssuer, TokenResponse};
pub use usecase::{LoginRequest, LoginUseCase, RegisterRequest, RegisterResponse, RegisterUseCase};
