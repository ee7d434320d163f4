//! Product use cases and their response types.

mod create;
mod delete;
mod fetch_by_id;
mod fetch_paged;
mod update;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::Product;

pub use create::{CreateProductRequest, CreateProductUseCase};
pub use delete::{DeleteProductRequest, DeleteProductUseCase};
pub use fetch_by_id::{FetchProductByIdRequest, FetchProductByIdUseCase};
pub use fetch_paged::{
    FetchProductsPagedRequest, FetchProductsPagedResponse, FetchProductsPagedUseCase,
};
pub use update::{UpdateProductRequest, UpdateProductUseCase};

/// Product as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductResponse {
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "Widget"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 10.0))]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Id of the product a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductIdResponse {
    pub id: Uuid,
}
