//! Product use cases. One method per call, each a thin orchestration over
//! `ProductRepo` on the request's transaction. Absence is a `None` result,
//! never an error; the router decides how absence renders.

use crate::error::AppError;
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::repo::ProductRepo;
use sqlx::PgConnection;

pub struct ProductService;

impl ProductService {
    /// Fetch up to `limit` products after skipping `skip`, in stable
    /// primary-key order. An empty store yields an empty vec; the router
    /// treats that as not-found per the API contract.
    pub async fn list(
        conn: &mut PgConnection,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Product>, AppError> {
        ProductRepo::list(conn, i64::from(skip), i64::from(limit)).await
    }

    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Product>, AppError> {
        ProductRepo::get(conn, id).await
    }

    pub async fn create(
        conn: &mut PgConnection,
        product: ProductCreate,
    ) -> Result<Product, AppError> {
        ProductRepo::insert(conn, &product).await
    }

    /// Partial update: only the fields present in `update` change.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        update: ProductUpdate,
    ) -> Result<Option<Product>, AppError> {
        ProductRepo::merge(conn, id, update).await
    }

    /// Permanent removal; the deleted record is returned to the caller.
    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<Option<Product>, AppError> {
        ProductRepo::remove(conn, id).await
    }
}
