//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{LoginUseCase, RegisterUseCase, TokenIssuer};
use common::Database;
use product_service_lib::{
    CreateProductUseCase, DeleteProductUseCase, FetchProductByIdUseCase,
    FetchProductsPagedUseCase, ProductRepository, UpdateProductUseCase,
};
use user_service_lib::UserRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub register: Arc<RegisterUseCase>,
    pub login: Arc<LoginUseCase>,
    pub create_product: Arc<CreateProductUseCase>,
    pub update_product: Arc<UpdateProductUseCase>,
    pub delete_product: Arc<DeleteProductUseCase>,
    pub fetch_product: Arc<FetchProductByIdUseCase>,
    pub fetch_products: Arc<FetchProductsPagedUseCase>,
    pub tokens: Arc<TokenIssuer>,
    /// Present when backed by a real database; used by the health check
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire every use case to the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            register: Arc::new(RegisterUseCase::new(users.clone())),
            login: Arc::new(LoginUseCase::new(users, tokens.clone())),
            create_product: Arc::new(CreateProductUseCase::new(products.clone())),
            update_product: Arc::new(UpdateProductUseCase::new(products.clone())),
            delete_product: Arc::new(DeleteProductUseCase::new(products.clone())),
            fetch_product: Arc::new(FetchProductByIdUseCase::new(products.clone())),
            fetch_products: Arc::new(FetchProductsPagedUseCase::new(products)),
            tokens,
            database: None,
        }
    }

    /// Attach the database so `/health` can ping it.
    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
