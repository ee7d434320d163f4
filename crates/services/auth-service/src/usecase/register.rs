use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::User;
use user_service_lib::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterResponse {
    pub id: Uuid,
}

/// Creates a user account.
pub struct RegisterUseCase {
    users: Arc<dyn UserRepository>,
}

impl RegisterUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Validate, hash the password off the async runtime, then insert.
    ///
    /// Duplicate emails surface as [`AppError::Conflict`] from the store.
    pub async fn execute(&self, req: RegisterRequest) -> AppResult<RegisterResponse> {
        let RegisterRequest {
            name,
            email,
            password,
        } = req;

        let user = tokio::task::spawn_blocking(move || User::new(name, email, &password))
            .await
            .map_err(|e| AppError::internal(format!("password hashing task failed: {}", e)))??;

        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(RegisterResponse { id: user.id })
    }
}
