use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use common::AppResult;

use super::ProductIdResponse;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProductRequest {
    pub id: Uuid,
}

pub struct DeleteProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl DeleteProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, req: DeleteProductRequest) -> AppResult<ProductIdResponse> {
        self.products.delete(req.id).await?;

        tracing::info!(product_id = %req.id, "Product deleted");
        Ok(ProductIdResponse { id: req.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use common::AppError;
    use domain::Product;

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let product = Product::new("Widget", 10.0).unwrap();
        repo.create(&product).await.unwrap();
        let usecase = DeleteProductUseCase::new(repo.clone());

        let first = usecase
            .execute(DeleteProductRequest { id: product.id })
            .await
            .unwrap();
        let second = usecase
            .execute(DeleteProductRequest { id: product.id })
            .await;

        assert_eq!(first.id, product.id);
        assert!(matches!(second, Err(AppError::NotFound)));
        assert!(repo.is_empty().await);
    }
}
