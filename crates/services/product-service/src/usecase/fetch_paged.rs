use std::sync::Arc;

use serde::{Deserialize, Serialize};

use common::AppResult;
use domain::{PageRequest, SortOrder};

use super::ProductResponse;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct FetchProductsPagedRequest {
    pub page_number: i64,
    pub page_size: i64,
    /// `"asc"` or `"desc"`; anything else sorts ascending
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FetchProductsPagedResponse {
    pub products: Vec<ProductResponse>,
}

pub struct FetchProductsPagedUseCase {
    products: Arc<dyn ProductRepository>,
}

impl FetchProductsPagedUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(
        &self,
        req: FetchProductsPagedRequest,
    ) -> AppResult<FetchProductsPagedResponse> {
        let sort = SortOrder::from_param(req.sort.as_deref());
        let page = PageRequest::new(req.page_number, req.page_size, sort)?;

        tracing::debug!(
            page_number = page.page_number(),
            page_size = page.page_size(),
            sort = %sort,
            "Fetching products page"
        );
        let products = self.products.fetch_paged(&page).await?;

        Ok(FetchProductsPagedResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use common::AppError;
    use domain::{Product, MAX_PAGE_SIZE};

    fn request(page_number: i64, page_size: i64, sort: Option<&str>) -> FetchProductsPagedRequest {
        FetchProductsPagedRequest {
            page_number,
            page_size,
            sort: sort.map(str::to_string),
        }
    }

    fn names(resp: &FetchProductsPagedResponse) -> Vec<&str> {
        resp.products.iter().map(|p| p.name.as_str()).collect()
    }

    async fn fruit_repo() -> Arc<InMemoryProductRepository> {
        let repo = Arc::new(InMemoryProductRepository::new());
        for (name, price) in [("Cherry", 3.0), ("Apple", 1.0), ("Banana", 2.0)] {
            repo.create(&Product::new(name, price).unwrap()).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_paging_scenario() {
        let usecase = FetchProductsPagedUseCase::new(fruit_repo().await);

        let first = usecase.execute(request(1, 2, Some("asc"))).await.unwrap();
        let second = usecase.execute(request(2, 2, Some("asc"))).await.unwrap();
        let third = usecase.execute(request(3, 2, Some("asc"))).await.unwrap();

        assert_eq!(names(&first), ["Apple", "Banana"]);
        assert_eq!(names(&second), ["Cherry"]);
        assert!(third.products.is_empty());
    }

    #[tokio::test]
    async fn test_descending_sort() {
        let usecase = FetchProductsPagedUseCase::new(fruit_repo().await);

        let resp = usecase.execute(request(1, 10, Some("desc"))).await.unwrap();

        assert_eq!(names(&resp), ["Cherry", "Banana", "Apple"]);
    }

    #[tokio::test]
    async fn test_unknown_sort_falls_back_to_ascending() {
        let usecase = FetchProductsPagedUseCase::new(fruit_repo().await);

        for sort in [None, Some("DESC"), Some("name")] {
            let resp = usecase.execute(request(1, 10, sort)).await.unwrap();
            assert_eq!(names(&resp), ["Apple", "Banana", "Cherry"]);
        }
    }

    #[tokio::test]
    async fn test_invalid_page_skips_persistence() {
        let usecase = FetchProductsPagedUseCase::new(Arc::new(MockProductRepository::new()));

        for (number, size) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let result = usecase.execute(request(number, size, None)).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_page_size_is_capped() {
        let mut repo = MockProductRepository::new();
        repo.expect_fetch_paged()
            .withf(|page| page.limit() == MAX_PAGE_SIZE && page.offset() == MAX_PAGE_SIZE)
            .times(1)
            .returning(|_| Ok(vec![]));
        let usecase = FetchProductsPagedUseCase::new(Arc::new(repo));

        let resp = usecase.execute(request(2, 10_000, None)).await.unwrap();

        assert!(resp.products.is_empty());
    }
}
