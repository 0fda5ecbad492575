//! Repository layer between the catalog service and the product store.
//!
//! Adds no business logic. Storage failures are logged with the product
//! that caused them and wrapped as [`RepositoryError::Creation`].

use std::sync::Arc;

use async_trait::async_trait;
use streetflow_core::domain::Product;
use streetflow_db::{ProductStore, StoreError};

/// Failure surfaced by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not persist the product. The store error stays
    /// reachable through `source()`.
    #[error("error creando producto: {0}")]
    Creation(#[source] StoreError),
}

impl RepositoryError {
    /// The store error behind this failure.
    pub fn store_error(&self) -> &StoreError {
        match self {
            RepositoryError::Creation(err) => err,
        }
    }
}

/// Product persistence as seen by the service layer.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist `product` and hand it back. The returned value is the input;
    /// the database-assigned id is not read back.
    async fn create_product(&self, product: Product) -> Result<Product, RepositoryError>;
}

/// [`ProductRepository`] that delegates to a [`ProductStore`].
pub struct StoreProductRepository {
    storage: Arc<dyn ProductStore>,
}

impl StoreProductRepository {
    pub fn new(storage: Arc<dyn ProductStore>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product, RepositoryError> {
        if let Err(err) = self.storage.create_product(&product).await {
            tracing::error!(product = ?product, error = %err, "Failed to create product");
            return Err(RepositoryError::Creation(err));
        }

        Ok(product)
    }
}
