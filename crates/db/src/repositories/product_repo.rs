//! Repository for the `products` table.
//!
//! Soft-deleted rows (`is_deleted = 1`) are invisible to every lookup here
//! except [`ProductRepo::upsert`], which keys on the id alone.

use catalog_core::types::{self, DbId};

use crate::models::product::{Product, ProductInput};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, price, description, stock_quantity, is_deleted, created_at, updated_at";

/// Provides soft-delete aware CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List every active product in insertion order.
    pub async fn list_active(pool: &DbPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE is_deleted = 0 ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Count active products.
    pub async fn count_active(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_deleted = 0")
            .fetch_one(pool)
            .await
    }

    /// Find an active product by id. Soft-deleted rows yield `None`.
    pub async fn find_active_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ? AND is_deleted = 0");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row with its store-assigned id.
    ///
    /// New rows always start active regardless of `input.is_deleted`.
    pub async fn create(pool: &DbPool, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let now = types::now();
        let query = format!(
            "INSERT INTO products
                (name, price, description, stock_quantity, is_deleted, created_at, updated_at)
             VALUES (?, ?, ?, ?, 0, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.stock_quantity)
            .bind(&now)
            .bind(&now)
            .fetch_one(pool)
            .await
    }

    /// Write a full product record under `id`.
    ///
    /// An existing row, active or soft-deleted, has every mutable field
    /// replaced (including `is_deleted`) and keeps its `created_at`. A missing
    /// id is inserted as a new row with exactly that id. Id `0` means
    /// unassigned: the row is inserted under a fresh store-assigned id.
    pub async fn upsert(
        pool: &DbPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Product, sqlx::Error> {
        let now = types::now();
        let query = format!(
            "INSERT INTO products
                (id, name, price, description, stock_quantity, is_deleted, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                description = excluded.description,
                stock_quantity = excluded.stock_quantity,
                is_deleted = excluded.is_deleted,
                created_at = COALESCE(products.created_at, excluded.created_at),
                updated_at = excluded.updated_at
             RETURNING {COLUMNS}"
        );
        // NULL into an INTEGER PRIMARY KEY allocates the next rowid.
        let id = (id != 0).then_some(id);
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.stock_quantity)
            .bind(input.is_deleted)
            .bind(&now)
            .bind(&now)
            .fetch_one(pool)
            .await
    }

    /// Replace an active product's fields.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update_active(
        pool: &DbPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = ?,
                price = ?,
                description = ?,
                stock_quantity = ?,
                is_deleted = ?,
                updated_at = ?
             WHERE id = ? AND is_deleted = 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.stock_quantity)
            .bind(input.is_deleted)
            .bind(types::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a product by id. Returns `true` if an active row was flagged.
    ///
    /// Loads the active row, then writes the flag back in a second statement.
    /// The pair is not atomic: an upsert landing between the two can be
    /// overwritten or can resurrect the row afterwards.
    pub async fn soft_delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let Some(product) = Self::find_active_by_id(pool, id).await? else {
            return Ok(false);
        };

        sqlx::query("UPDATE products SET is_deleted = 1, updated_at = ? WHERE id = ?")
            .bind(types::now())
            .bind(product.id)
            .execute(pool)
            .await?;
        Ok(true)
    }
}
