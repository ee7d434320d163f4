//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use auth_service_lib::{RegisterResponse, TokenResponse};
use domain::SortOrder;
use product_service_lib::{FetchProductsPagedResponse, ProductIdResponse, ProductResponse};

use crate::handlers::auth_handler::{LoginBody, RegisterBody};
use crate::handlers::health_handler::{DatabaseHealth, HealthResponse};
use crate::handlers::product_handler::ProductBody;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::delete_product,
    ),
    components(
        schemas(
            RegisterBody,
            LoginBody,
            RegisterResponse,
            TokenResponse,
            ProductBody,
            ProductResponse,
            ProductIdResponse,
            FetchProductsPagedResponse,
            SortOrder,
            HealthResponse,
            DatabaseHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Products", description = "Product catalog"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
