//! Product composite handlers
//!
//! Extraction failures are taken as `Result`s so they leave through the same
//! error envelope as downstream failures.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        OriginalUri, Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::ProductId;
use domain_composite::{ProductAggregate, ProductComposite};

use crate::dto::PageQuery;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Returns a product with one page of its recommendations and reviews
pub async fn get_composite_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    product_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ProductAggregate>, ErrorResponse> {
    let path = uri.path();
    let Path(product_id) = product_id.map_err(|e| ApiError::from(e).at(path))?;
    let Query(query) = query.map_err(|e| ApiError::from(e).at(path))?;
    query.validate().map_err(|e| ApiError::from(e).at(path))?;

    let aggregate = state
        .service
        .get_composite_product(ProductId::new(product_id), query.into())
        .await
        .map_err(|e| ApiError::from(e).at(path))?;

    Ok(Json(aggregate))
}

/// Creates a product together with its recommendations and reviews
pub async fn create_composite_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ProductComposite>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductComposite>), ErrorResponse> {
    let path = uri.path();
    let Json(body) = body.map_err(|e| ApiError::from(e).at(path))?;

    let created = state
        .service
        .create_composite_product(body)
        .await
        .map_err(|e| ApiError::from(e).at(path))?;

    info!(product_id = %created.product_id, "Composite product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Accepts the deletion of a composite product
///
/// Answers 202 once the deletion events are published; the owning services
/// delete their data asynchronously.
pub async fn delete_composite_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    product_id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ErrorResponse> {
    let path = uri.path();
    let Path(product_id) = product_id.map_err(|e| ApiError::from(e).at(path))?;

    state
        .service
        .delete_composite_product(ProductId::new(product_id))
        .await
        .map_err(|e| ApiError::from(e).at(path))?;

    Ok(StatusCode::ACCEPTED)
}
