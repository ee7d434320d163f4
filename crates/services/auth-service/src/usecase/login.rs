use std::sync::Arc;

use serde::Deserialize;

use common::{AppError, AppResult};
use domain::Password;
use user_service_lib::UserRepository;

use crate::token::{TokenIssuer, TokenResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Exchanges credentials for an access token.
pub struct LoginUseCase {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
}

impl LoginUseCase {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    pub async fn execute(&self, req: LoginRequest) -> AppResult<TokenResponse> {
        let LoginRequest { email, password } = req;
        let user = self.users.fetch_by_email(&email).await?;

        // Unknown emails still pay for one verification so timing stays flat
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let password_valid = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => Password::from_hash(hash).verify(&password),
            None => Password::verify_dummy(&password),
        })
        .await
        .map_err(|e| AppError::internal(format!("password verification task failed: {}", e)))?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!(email = %email, "Failed login attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::{RegisterRequest, RegisterUseCase};
    use common::JwtConfig;
    use user_service_lib::{InMemoryUserRepository, MockUserRepository};

    fn issuer() -> Arc<TokenIssuer> {
        let config = JwtConfig::new("a-test-secret-that-is-long-enough-for-hs256", 3600).unwrap();
        Arc::new(TokenIssuer::new(&config))
    }

    async fn registered(repo: Arc<InMemoryUserRepository>) -> uuid::Uuid {
        RegisterUseCase::new(repo)
            .execute(RegisterRequest {
                name: "Matheus".to_string(),
                email: "matheus@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user_id = registered(repo.clone()).await;
        let tokens = issuer();
        let usecase = LoginUseCase::new(repo, tokens.clone());

        let token = usecase
            .execute(login("matheus@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        let claims = tokens.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        registered(repo.clone()).await;
        let usecase = LoginUseCase::new(repo, issuer());

        let result = usecase
            .execute(login("matheus@example.com", "wrong-password"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_email_gives_same_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch_by_email()
            .times(1)
            .returning(|_| Ok(None));
        let usecase = LoginUseCase::new(Arc::new(repo), issuer());

        let result = usecase
            .execute(login("nobody@example.com", "password123"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_store_failure_is_not_masked() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch_by_email()
            .returning(|_| Err(AppError::internal("connection reset")));
        let usecase = LoginUseCase::new(Arc::new(repo), issuer());

        let result = usecase
            .execute(login("matheus@example.com", "password123"))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
