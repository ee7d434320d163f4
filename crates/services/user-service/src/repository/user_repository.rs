//! User repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn fetch_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. A taken email gives [`AppError::Conflict`].
    async fn create(&self, user: &User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn fetch_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        UserEntity::insert(ActiveModel::from(user))
            .exec_without_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        tracing::debug!(user_id = %user.id, "User row inserted");
        Ok(())
    }
}

fn map_insert_error(err: DbErr) -> AppError {
    let kind = err.sql_err();
    classify_insert_error(err, kind)
}

/// Maps an insert failure using the backend's SQL error classification.
fn classify_insert_error(err: DbErr, kind: Option<SqlErr>) -> AppError {
    match kind {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}
