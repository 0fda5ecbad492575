//! Substitute stores and fixtures for catalog tests.
//!
//! Built for this crate's unit tests and, with the `test-utils` feature, for
//! its integration tests.

use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use streetflow_core::domain::Product;
use streetflow_db::{ProductStore, StoreError};

/// A complete product as a client would submit it.
pub fn hoodie() -> Product {
    Product {
        category_id: "2".to_string(),
        name: "Hoodie".to_string(),
        size: "M".to_string(),
        description: "Cotton hoodie".to_string(),
        price: 39.99,
        ..Default::default()
    }
}

/// How a [`FakeStore`] answers every call.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Succeed,
    ConnectionRefused,
    UniqueViolation,
}

/// Records every product it is asked to persist.
pub struct FakeStore {
    outcome: Outcome,
    calls: Mutex<Vec<Product>>,
}

impl FakeStore {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Product> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductStore for FakeStore {
    async fn create_product(&self, product: &Product) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(product.clone());

        match self.outcome {
            Outcome::Succeed => Ok(()),
            Outcome::ConnectionRefused => Err(StoreError::Preparation(sqlx::Error::Io(
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            ))),
            Outcome::UniqueViolation => Err(StoreError::Execution(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"uq_productos_nombre\"".into(),
            ))),
        }
    }
}
