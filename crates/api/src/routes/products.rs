//! Route definitions for the product catalog.

use axum::routing::post;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/productos`.
///
/// ```text
/// POST /  -> create_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(products::create_product))
}
