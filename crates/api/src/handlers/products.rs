//! Handlers for the product catalog.
//!
//! Request parsing, required-field checks and status mapping happen here;
//! persistence is delegated to [`ProductService`](streetflow_catalog::ProductService).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use streetflow_core::domain::{CreateProduct, Product};
use streetflow_core::error::CoreError;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/productos
///
/// Create a product. Returns 201 with the stored product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let product = state.products.create_product(Product::from(input)).await?;

    tracing::info!(
        name = %product.name,
        category_id = %product.category_id,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}
