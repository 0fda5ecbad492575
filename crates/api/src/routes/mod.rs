pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /productos                                       create product (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/productos", products::router())
}
