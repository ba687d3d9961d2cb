use axum::{
    extract::{Path, State},
    Json,
};
use catalog_core::{Acknowledgment, Product, ProductDraft};
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.with_store(|store, root| store.find_all(root)).await?;
    debug!("listing {} products", products.len());
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .with_store(move |store, root| store.insert(root, &draft))
        .await?;
    debug!("created product {}", product.id);
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, AppError> {
    let lookup = id.clone();
    let updated = state
        .with_store(move |store, root| store.update(root, &lookup, &draft))
        .await?;
    match updated {
        Some(product) => {
            debug!("updated product {id}");
            Ok(Json(product))
        }
        None => Err(AppError::NotFound(id)),
    }
}

/// Deleting an id that is already gone still acknowledges.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgment>, AppError> {
    let lookup = id.clone();
    let removed = state
        .with_store(move |store, root| store.delete(root, &lookup))
        .await?;
    debug!("delete {id}: removed={}", removed.is_some());
    Ok(Json(Acknowledgment::deleted()))
}
