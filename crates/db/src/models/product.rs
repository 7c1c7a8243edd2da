//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock_quantity: i64,
    pub is_deleted: bool,
    /// `None` only for rows written before timestamps were populated.
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Product-shaped request body used by both create and update.
///
/// Missing fields fall back to their zero value. An `id` or timestamp key in
/// the body is ignored: ids come from the store or the URL path, and
/// timestamps are maintained by the repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock_quantity: i64,
    /// Ignored by create. Update writes it through, so a caller that omits
    /// it on an existing soft-deleted row brings the row back.
    pub is_deleted: bool,
}
