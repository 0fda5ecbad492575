use std::sync::Arc;

use streetflow_catalog::{CatalogService, ProductService, StoreProductRepository};
use streetflow_db::{DbPool, SqlProductStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and everything else sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Product catalog entry point.
    pub products: Arc<dyn ProductService>,
}

impl AppState {
    /// Wire the catalog stack (SQL store -> repository -> service) over `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(SqlProductStore::new(pool.clone()));
        let repository = Arc::new(StoreProductRepository::new(store));
        let products = Arc::new(CatalogService::new(repository));

        Self {
            pool,
            config: Arc::new(config),
            products,
        }
    }
}
