use std::sync::Arc;

use serde::Deserialize;

use common::AppResult;
use domain::Product;

use super::ProductIdResponse;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

pub struct CreateProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, req: CreateProductRequest) -> AppResult<ProductIdResponse> {
        let product = Product::new(req.name, req.price)?;
        self.products.create(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(ProductIdResponse { id: product.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use common::AppError;

    fn request(name: &str, price: f64) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_product() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let usecase = CreateProductUseCase::new(repo.clone());

        let resp = usecase.execute(request("Widget", 10.0)).await.unwrap();

        let stored = repo.fetch_by_id(resp.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.price, 10.0);
    }

    #[tokio::test]
    async fn test_invalid_input_skips_persistence() {
        // No expectations: any repository call fails the test
        let usecase = CreateProductUseCase::new(Arc::new(MockProductRepository::new()));

        let invalid = [
            ("", 10.0),
            ("Widget", 0.0),
            ("Widget", -1.5),
            ("Widget", f64::NAN),
        ];
        for (name, price) in invalid {
            let result = usecase.execute(request(name, price)).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "{name:?} {price}");
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_returned() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("disk full")));
        let usecase = CreateProductUseCase::new(Arc::new(repo));

        let result = usecase.execute(request("Widget", 10.0)).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
