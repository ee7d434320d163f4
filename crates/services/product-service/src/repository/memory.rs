//! In-memory product repository for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProductRepository;
use common::{AppError, AppResult};
use domain::{PageRequest, Product, SortOrder};

/// Map-backed store with the same ordering and not-found rules as SQL.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn fetch_paged(&self, page: &PageRequest) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();

        all.sort_by(|a, b| {
            let by_name = match page.sort() {
                SortOrder::Asc => a.name.cmp(&b.name),
                SortOrder::Desc => b.name.cmp(&a.name),
            };
            by_name.then_with(|| a.id.cmp(&b.id))
        });

        Ok(all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn fetch_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn create(&self, product: &Product) -> AppResult<()> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        let existing = products.get_mut(&product.id).ok_or(AppError::NotFound)?;
        existing.name = product.name.clone();
        existing.price = product.price;
        existing.updated_at = product.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.products
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
