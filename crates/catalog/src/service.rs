//! Entry point for transport code.
//!
//! Handlers depend on [`ProductService`] rather than on a concrete
//! repository. No rules live here.

use std::sync::Arc;

use async_trait::async_trait;
use streetflow_core::domain::Product;

use crate::repository::{ProductRepository, RepositoryError};

/// Catalog operations exposed to handlers.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create_product(&self, product: Product) -> Result<Product, RepositoryError>;
}

/// [`ProductService`] that delegates to a [`ProductRepository`].
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductService for CatalogService {
    async fn create_product(&self, product: Product) -> Result<Product, RepositoryError> {
        self.repository.create_product(product).await
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use streetflow_db::{ProductStore, StoreError};

    use super::*;
    use crate::repository::StoreProductRepository;
    use crate::test_support::{hoodie, FakeStore, Outcome};

    /// Repository that answers with a canned result and records its input.
    struct CannedRepository {
        result: Mutex<Option<Result<Product, RepositoryError>>>,
        received: Mutex<Vec<Product>>,
    }

    impl CannedRepository {
        fn new(result: Result<Product, RepositoryError>) -> Self {
            Self {
                result: Mutex::new(Some(result)),
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for CannedRepository {
        async fn create_product(&self, product: Product) -> Result<Product, RepositoryError> {
            self.received.lock().unwrap().push(product);
            self.result
                .lock()
                .unwrap()
                .take()
                .expect("canned repository called more than once")
        }
    }

    fn full_stack(outcome: Outcome) -> CatalogService {
        let store: Arc<dyn ProductStore> = Arc::new(FakeStore::new(outcome));
        CatalogService::new(Arc::new(StoreProductRepository::new(store)))
    }

    #[tokio::test]
    async fn repository_product_returned_unchanged() {
        // Differs from the input so a service that echoed its argument
        // would be caught.
        let stored = Product {
            id: 7,
            ..hoodie()
        };
        let repo = Arc::new(CannedRepository::new(Ok(stored.clone())));
        let service = CatalogService::new(Arc::clone(&repo) as Arc<dyn ProductRepository>);

        let created = service.create_product(hoodie()).await.unwrap();

        assert_eq!(created, stored);
        assert_eq!(*repo.received.lock().unwrap(), vec![hoodie()]);
    }

    #[tokio::test]
    async fn repository_error_returned_unchanged() {
        let repo_err = RepositoryError::Creation(StoreError::Execution(sqlx::Error::RowNotFound));
        let expected_message = repo_err.to_string();
        let service = CatalogService::new(Arc::new(CannedRepository::new(Err(repo_err))));

        let err = service.create_product(hoodie()).await.unwrap_err();

        assert_eq!(err.to_string(), expected_message);
        assert_matches!(
            err,
            RepositoryError::Creation(StoreError::Execution(sqlx::Error::RowNotFound))
        );
    }

    #[tokio::test]
    async fn hoodie_created_through_every_layer() {
        let service = full_stack(Outcome::Succeed);

        let created = service.create_product(hoodie()).await.unwrap();

        assert_eq!(created, hoodie());
    }

    #[tokio::test]
    async fn refused_connection_surfaces_through_service() {
        let service = full_stack(Outcome::ConnectionRefused);

        let err = service.create_product(hoodie()).await.unwrap_err();

        assert!(err.to_string().contains("error creando producto"));
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("connection refused"));
        assert_matches!(err.store_error(), StoreError::Preparation(_));
    }

    #[tokio::test]
    async fn unique_violation_surfaces_through_service() {
        let service = full_stack(Outcome::UniqueViolation);

        let err = service.create_product(hoodie()).await.unwrap_err();

        assert!(err.to_string().contains("error creando producto"));
        assert_matches!(err.store_error(), StoreError::Execution(_));
    }
}
