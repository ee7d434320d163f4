//! Product repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::{AppError, AppResult};
use domain::{PageRequest, Product, SortOrder};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products ordered by name, ties broken by id
    async fn fetch_paged(&self, page: &PageRequest) -> AppResult<Vec<Product>>;

    /// Find a product by ID
    async fn fetch_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Insert a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Overwrite name, price and `updated_at`. Missing rows give [`AppError::NotFound`].
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete by ID. Missing rows give [`AppError::NotFound`].
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn order_of(sort: SortOrder) -> Order {
    match sort {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn fetch_paged(&self, page: &PageRequest) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by(product::Column::Name, order_of(page.sort()))
            .order_by_asc(product::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn fetch_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, product: &Product) -> AppResult<()> {
        ProductEntity::insert(ActiveModel::from(product))
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = ProductEntity::update_many()
            .col_expr(product::Column::Name, Expr::value(product.name.clone()))
            .col_expr(product::Column::Price, Expr::value(product.price))
            .col_expr(product::Column::UpdatedAt, Expr::value(product.updated_at))
            .filter(product::Column::Id.eq(product.id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
