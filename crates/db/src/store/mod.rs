//! Storage capabilities consumed by the repository layer.
//!
//! Each trait is the narrowest surface the layer above needs. Only the
//! operations with a concrete implementation are declared.

use async_trait::async_trait;
use streetflow_core::domain::Product;

mod product_store;

pub use product_store::SqlProductStore;

/// Failure while talking to the database, split by the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection could be acquired or the statement was rejected while
    /// preparing.
    #[error("error preparing query: {0}")]
    Preparation(#[source] sqlx::Error),

    /// The prepared statement failed when executed with its arguments.
    #[error("error executing query: {0}")]
    Execution(#[source] sqlx::Error),
}

impl StoreError {
    /// The driver error behind either step.
    pub fn db_error(&self) -> &sqlx::Error {
        match self {
            StoreError::Preparation(err) | StoreError::Execution(err) => err,
        }
    }
}

/// Persistence for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert one product row. The database assigns the id, which is not
    /// reported back.
    async fn create_product(&self, product: &Product) -> Result<(), StoreError>;
}
