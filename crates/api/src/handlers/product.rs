//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::product::{Product, ProductInput};
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ProductId};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductRepo::list_active(&state.pool).await?;
    tracing::debug!(count = products.len(), "Listed active products");
    Ok(Json(ApiResponse::ok(
        products,
        "Products retrieved successfully",
    )))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(product, "Product retrieved successfully")))
}

/// POST /products
///
/// Responds 200 rather than 201; existing clients check for 200.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, "Product created");
    Ok(Json(ApiResponse::ok(product, "Product created successfully")))
}

/// PUT /products/{id}
///
/// The path id wins over any id in the body. Unless upserts are disabled in
/// the server config, an id with no row is created rather than rejected.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = if state.config.update_upserts {
        ProductRepo::upsert(&state.pool, id, &input).await?
    } else {
        ProductRepo::update_active(&state.pool, id, &input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }))?
    };
    tracing::info!(product_id = product.id, is_deleted = product.is_deleted, "Product updated");
    Ok(Json(ApiResponse::ok(product, "Product updated successfully")))
}

/// DELETE /products/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProductRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(product_id = id, "Product soft-deleted");
        Ok(Json(ApiResponse::empty("Product deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}
