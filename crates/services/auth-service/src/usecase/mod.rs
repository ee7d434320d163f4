//! Authentication use cases.

mod login;
mod register;

pub use login::{LoginRequest, LoginUseCase};
pub use register::{RegisterRequest, RegisterResponse, RegisterUseCase};
