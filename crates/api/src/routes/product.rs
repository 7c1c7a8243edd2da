//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes.
///
/// ```text
/// GET    /products         -> list
/// POST   /products         -> create
/// GET    /products/{id}    -> get_by_id
/// PUT    /products/{id}    -> update
/// DELETE /products/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
}
