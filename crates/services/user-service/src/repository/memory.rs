//! In-memory user repository for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserRepository;
use common::{AppError, AppResult};
use domain::User;

/// Keeps users in a map and enforces unique emails like the real store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn fetch_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("User"));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        let first = User::new("Ana", "ana@example.com", "password123").unwrap();
        let second = User::new("Ana Two", "ana@example.com", "password456").unwrap();

        repo.create(&first).await.unwrap();
        let result = repo.create(&second).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_fetch_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Ana", "ana@example.com", "password123").unwrap();
        repo.create(&user).await.unwrap();

        assert_eq!(repo.fetch_by_email("ana@example.com").await.unwrap(), Some(user));
        assert!(repo.fetch_by_email("bob@example.com").await.unwrap().is_none());
    }
}
