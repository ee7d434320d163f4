use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use common::{AppResult, OptionExt};

use super::ProductResponse;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct FetchProductByIdRequest {
    pub id: Uuid,
}

pub struct FetchProductByIdUseCase {
    products: Arc<dyn ProductRepository>,
}

impl FetchProductByIdUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, req: FetchProductByIdRequest) -> AppResult<ProductResponse> {
        tracing::debug!(product_id = %req.id, "Fetching product");
        let product = self.products.fetch_by_id(req.id).await?.ok_or_not_found()?;
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use crate::usecase::{
        CreateProductRequest, CreateProductUseCase, UpdateProductRequest, UpdateProductUseCase,
    };
    use common::AppError;

    #[tokio::test]
    async fn test_create_then_fetch_returns_equal_product() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let created = CreateProductUseCase::new(repo.clone())
            .execute(CreateProductRequest {
                name: "Widget".to_string(),
                price: 10.0,
            })
            .await
            .unwrap();

        let fetched = FetchProductByIdUseCase::new(repo.clone())
            .execute(FetchProductByIdRequest { id: created.id })
            .await
            .unwrap();

        let stored = repo.fetch_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, ProductResponse::from(stored));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_fetch_by_id().returning(|_| Ok(None));
        let usecase = FetchProductByIdUseCase::new(Arc::new(repo));

        let result = usecase
            .execute(FetchProductByIdRequest { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let fetch = FetchProductByIdUseCase::new(repo.clone());

        let created = CreateProductUseCase::new(repo.clone())
            .execute(CreateProductRequest {
                name: "Widget".to_string(),
                price: 10.0,
            })
            .await
            .unwrap();
        let before = fetch
            .execute(FetchProductByIdRequest { id: created.id })
            .await
            .unwrap();
        assert_eq!(before.name, "Widget");
        assert_eq!(before.price, 10.0);

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        UpdateProductUseCase::new(repo.clone())
            .execute(UpdateProductRequest {
                id: created.id,
                name: "Widget Pro".to_string(),
                price: 15.0,
            })
            .await
            .unwrap();

        let after = fetch
            .execute(FetchProductByIdRequest { id: created.id })
            .await
            .unwrap();
        assert_eq!(after.name, "Widget Pro");
        assert_eq!(after.price, 15.0);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }
}
