//! Product catalog request path.
//!
//! ```text
//! ProductService -> ProductRepository -> ProductStore (streetflow-db)
//! ```
//!
//! Each layer holds the one below behind a trait object handed to its
//! constructor, so any layer can be exercised against a substitute.

pub mod repository;
pub mod service;

pub use repository::{ProductRepository, RepositoryError, StoreProductRepository};
pub use service::{CatalogService, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
