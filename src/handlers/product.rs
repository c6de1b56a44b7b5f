//! Product CRUD handlers: list, read, create, update, delete.
//!
//! Each handler opens one transaction, runs the use case on it, and commits
//! before serializing the response, so callers only ever see committed state.
//! Dropping the transaction on an error path rolls back.

use crate::error::AppError;
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::service::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Decode a JSON body into its typed shape, mapping type and required-field
/// mismatches to a 422 before the service runs.
fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

fn product_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("product {} not found", id))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<(StatusCode, Json<Vec<Product>>), AppError> {
    let mut tx = state.pool.begin().await?;
    let products = ProductService::list(&mut tx, params.skip, params.limit).await?;
    tx.commit().await?;
    // An empty result renders as 404, not an empty 200.
    if products.is_empty() {
        return Err(AppError::NotFound("no products found".into()));
    }
    Ok((StatusCode::OK, Json(products)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let mut tx = state.pool.begin().await?;
    let product = ProductService::get(&mut tx, id).await?;
    tx.commit().await?;
    let product = product.ok_or_else(|| product_not_found(id))?;
    Ok((StatusCode::OK, Json(product)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let payload: ProductCreate = decode_body(body)?;
    let mut tx = state.pool.begin().await?;
    let product = ProductService::create(&mut tx, payload).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let payload: ProductUpdate = decode_body(body)?;
    let mut tx = state.pool.begin().await?;
    let product = ProductService::update(&mut tx, id, payload).await?;
    tx.commit().await?;
    let product = product.ok_or_else(|| product_not_found(id))?;
    Ok((StatusCode::OK, Json(product)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let mut tx = state.pool.begin().await?;
    let product = ProductService::delete(&mut tx, id).await?;
    tx.commit().await?;
    let product = product.ok_or_else(|| product_not_found(id))?;
    Ok((StatusCode::OK, Json(product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_params_default_to_skip_0_limit_100() {
        let p: ListParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn decode_body_maps_bad_payloads_to_validation() {
        let err = decode_body::<ProductCreate>(json!({"name": 42, "price": 1.0})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn decode_body_accepts_partial_updates() {
        let u: ProductUpdate = decode_body(json!({"price": 5.0})).unwrap();
        assert_eq!(u.price, Some(5.0));
        assert!(u.name.is_none());
    }
}
