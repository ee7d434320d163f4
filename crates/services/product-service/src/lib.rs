//! Product Service Library
//!
//! Catalog persistence and the product use cases: create, update, delete,
//! fetch by id and paged listing.

pub mod repository;
pub mod usecase;

pub use repository::{ProductRepository, ProductStore};
pub use usecase::{
    CreateProductRequest, CreateProductUseCase, DeleteProductRequest, DeleteProductUseCase,
    FetchProductByIdRequest, FetchProductByIdUseCase, FetchProductsPagedRequest,
    FetchProductsPagedResponse, FetchProductsPagedUseCase, ProductIdResponse, ProductResponse,
    UpdateProductRequest, UpdateProductUseCase,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{InMemoryProductRepository, MockProductRepository};
