//! Product REST API handlers
//!
//! Reads are public. Writes require the `merchant` role, and updates and
//! deletes are limited to the merchant that owns the product.

use crate::{
    ApiError, ApiResult, AppState, CreateProductRequest, DeleteResponse, ListProductsQuery,
    MaybeUser, ProductDto, ProductListResponse, ProductResponse, UpdateProductRequest,
};

use shop_auth::authorize;
use shop_core::{Product, Role, User};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/products
///
/// List all products, optionally for one merchant
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    let repo = state.products();
    let products = match query.merchant_id {
        Some(merchant_id) => {
            let merchant_uuid = Uuid::parse_str(&merchant_id)?;
            repo.find_by_merchant(merchant_uuid).await?
        }
        None => repo.find_all().await?,
    };

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    let product = find_product(&state, &id).await?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let merchant = authorize(identity.as_ref(), Role::Merchant)?;

    let product = Product::new(merchant.id, &req.name, req.description, req.price_cents)?;
    state.products().create(&product).await?;

    log::info!(
        "Merchant {} created product {} via REST API",
        merchant.id,
        product.id
    );

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product: product.into(),
        }),
    ))
}

/// PUT /api/v1/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let merchant = authorize(identity.as_ref(), Role::Merchant)?;

    let mut product = find_product(&state, &id).await?;
    ensure_owner(&product, merchant)?;

    product.apply_update(req.name.as_deref(), req.description, req.price_cents)?;
    state.products().update(&product).await?;

    log::info!(
        "Merchant {} updated product {} via REST API",
        merchant.id,
        product.id
    );

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let merchant = authorize(identity.as_ref(), Role::Merchant)?;

    let product = find_product(&state, &id).await?;
    ensure_owner(&product, merchant)?;

    if !state.products().delete(product.id).await? {
        return Err(ApiError::NotFound {
            message: format!("Product {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!(
        "Merchant {} deleted product {} via REST API",
        merchant.id,
        product.id
    );

    Ok(Json(DeleteResponse {
        deleted_id: product.id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn find_product(state: &AppState, id: &str) -> ApiResult<Product> {
    let product_id = Uuid::parse_str(id)?;

    state
        .products()
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Product {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn ensure_owner(product: &Product, merchant: &User) -> ApiResult<()> {
    if !product.is_owned_by(merchant.id) {
        return Err(ApiError::Forbidden {
            message: format!("Product {} belongs to another merchant", product.id),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
