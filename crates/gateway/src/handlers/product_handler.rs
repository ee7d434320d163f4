//! Product catalog handlers. Every route here sits behind the auth middleware.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use product_service_lib::{
    CreateProductRequest, DeleteProductRequest, FetchProductByIdRequest,
    FetchProductsPagedRequest, FetchProductsPagedResponse, ProductIdResponse, ProductResponse,
    UpdateProductRequest,
};

use crate::extractors::{QueryParams, UuidPath, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Product create/update body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductBody {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 10.0)]
    pub price: f64,
}

/// Paging parameters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// 1-indexed page number (default 1)
    pub page_number: Option<i64>,
    /// Items per page (default 10, capped at 100)
    pub page_size: Option<i64>,
    /// `asc` or `desc` by name (default `asc`)
    pub sort: Option<String>,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List products one page at a time
#[utoipa::path(
    get,
    path = "/v1/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(ProductListQuery),
    responses(
        (status = 200, description = "Page of products", body = FetchProductsPagedResponse),
        (status = 400, description = "Invalid paging parameters"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductListQuery>,
) -> AppResult<Json<FetchProductsPagedResponse>> {
    let resp = state
        .fetch_products
        .execute(FetchProductsPagedRequest {
            page_number: query.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort: query.sort,
        })
        .await?;

    Ok(Json(resp))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .fetch_product
        .execute(FetchProductByIdRequest { id })
        .await?;

    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/v1/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product created", body = ProductIdResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ProductBody>,
) -> AppResult<(StatusCode, Json<ProductIdResponse>)> {
    tracing::debug!(user_id = %current_user.id, "Create product requested");
    let resp = state
        .create_product
        .execute(CreateProductRequest {
            name: body.name,
            price: body.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(resp)))
}

/// Replace a product's name and price
#[utoipa::path(
    put,
    path = "/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductBody,
    responses(
        (status = 200, description = "Product updated", body = ProductIdResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(body): ValidatedJson<ProductBody>,
) -> AppResult<Json<ProductIdResponse>> {
    tracing::debug!(user_id = %current_user.id, product_id = %id, "Update product requested");
    let resp = state
        .update_product
        .execute(UpdateProductRequest {
            id,
            name: body.name,
            price: body.price,
        })
        .await?;

    Ok(Json(resp))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ProductIdResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ProductIdResponse>> {
    tracing::debug!(user_id = %current_user.id, product_id = %id, "Delete product requested");
    let resp = state
        .delete_product
        .execute(DeleteProductRequest { id })
        .await?;

    Ok(Json(resp))
}
