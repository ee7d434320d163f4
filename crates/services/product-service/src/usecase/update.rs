use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::Product;

use super::ProductIdResponse;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

pub struct UpdateProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Replace name and price of an existing product.
    ///
    /// Invalid values are rejected before the store is touched.
    pub async fn execute(&self, req: UpdateProductRequest) -> AppResult<ProductIdResponse> {
        Product::validate_fields(&req.name, req.price)?;

        let mut product = self.products.fetch_by_id(req.id).await?.ok_or_not_found()?;
        product.update(req.name, req.price)?;
        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(ProductIdResponse { id: product.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use common::AppError;

    #[tokio::test]
    async fn test_invalid_fields_skip_persistence() {
        let usecase = UpdateProductUseCase::new(Arc::new(MockProductRepository::new()));

        let result = usecase
            .execute(UpdateProductRequest {
                id: Uuid::new_v4(),
                name: "Widget".to_string(),
                price: 0.0,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(ref m)) if m == "price must be greater than 0"
        ));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_fetch_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update().never();
        let usecase = UpdateProductUseCase::new(Arc::new(repo));

        let result = usecase
            .execute(UpdateProductRequest {
                id: Uuid::new_v4(),
                name: "Widget".to_string(),
                price: 12.5,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_product_removed_before_write_is_not_found() {
        let product = Product::new("Widget", 10.0).unwrap();
        let id = product.id;
        let mut repo = MockProductRepository::new();
        repo.expect_fetch_by_id()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_update()
            .withf(|updated| updated.name == "Gadget" && updated.price == 20.0)
            .times(1)
            .returning(|_| Err(AppError::NotFound));
        let usecase = UpdateProductUseCase::new(Arc::new(repo));

        let result = usecase
            .execute(UpdateProductRequest {
                id,
                name: "Gadget".to_string(),
                price: 20.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let product = Product::new("Widget", 10.0).unwrap();
        repo.create(&product).await.unwrap();
        let usecase = UpdateProductUseCase::new(repo.clone());

        let resp = usecase
            .execute(UpdateProductRequest {
                id: product.id,
                name: "Gadget".to_string(),
                price: 20.0,
            })
            .await
            .unwrap();

        assert_eq!(resp.id, product.id);
        let stored = repo.fetch_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Gadget");
        assert_eq!(stored.price, 20.0);
        assert_eq!(stored.created_at, product.created_at);
    }
}
