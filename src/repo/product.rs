//! Product row operations. Every call runs on the caller's connection or
//! transaction; nothing here commits.

use crate::error::AppError;
use crate::model::{Product, ProductCreate, ProductUpdate};
use sqlx::PgConnection;

const COLUMNS: &str = "id, name, description, price, in_stock";

pub struct ProductRepo;

impl ProductRepo {
    /// Page through products in primary-key order. No cap on `limit`.
    pub async fn list(
        conn: &mut PgConnection,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError> {
        tracing::debug!(skip, limit, "list products");
        let sql = format!(
            "SELECT {} FROM products ORDER BY id ASC OFFSET $1 LIMIT $2",
            COLUMNS
        );
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Point lookup by primary key.
    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", COLUMNS);
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    /// Insert one row; the id is assigned by the database and returned with
    /// the stored record.
    pub async fn insert(
        conn: &mut PgConnection,
        product: &ProductCreate,
    ) -> Result<Product, AppError> {
        tracing::debug!(name = %product.name, "insert product");
        let sql = format!(
            "INSERT INTO products (name, description, price, in_stock) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.in_stock)
            .fetch_one(conn)
            .await?;
        Ok(row)
    }

    /// Apply the present fields of `update` onto the row with `id`. Returns
    /// None when no such row exists.
    pub async fn merge(
        conn: &mut PgConnection,
        id: i64,
        update: ProductUpdate,
    ) -> Result<Option<Product>, AppError> {
        let Some(mut row) = Self::get(&mut *conn, id).await? else {
            return Ok(None);
        };
        row.apply(update);
        tracing::debug!(id, "update product");
        let sql = format!(
            "UPDATE products SET name = $2, description = $3, price = $4, in_stock = $5 WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.description)
            .bind(row.price)
            .bind(row.in_stock)
            .fetch_one(conn)
            .await?;
        Ok(Some(updated))
    }

    /// Delete the row with `id`, returning it as it existed before deletion.
    /// Returns None when no such row exists.
    pub async fn remove(conn: &mut PgConnection, id: i64) -> Result<Option<Product>, AppError> {
        tracing::debug!(id, "delete product");
        let sql = format!("DELETE FROM products WHERE id = $1 RETURNING {}", COLUMNS);
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }
}
