use async_trait::async_trait;
use sqlx::{Executor, Statement};
use streetflow_core::domain::Product;

use super::{ProductStore, StoreError};
use crate::DbPool;

/// Column order is the bind order in [`SqlProductStore::create_product`].
const INSERT_PRODUCT: &str = "\
    INSERT INTO productos (id_categoria, nombre, talle, descripcion, precio) \
    VALUES ($1, $2, $3, $4, $5)";

/// [`ProductStore`] backed by the `productos` table.
#[derive(Debug, Clone)]
pub struct SqlProductStore {
    pool: DbPool,
}

impl SqlProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqlProductStore {
    async fn create_product(&self, product: &Product) -> Result<(), StoreError> {
        // Connection and statement are dropped at the end of this scope on
        // every path, which hands the connection back to the pool.
        let mut conn = self.pool.acquire().await.map_err(StoreError::Preparation)?;

        let stmt = (&mut *conn)
            .prepare(INSERT_PRODUCT)
            .await
            .map_err(StoreError::Preparation)?;

        let result = stmt
            .query()
            .bind(&product.category_id)
            .bind(&product.name)
            .bind(&product.size)
            .bind(&product.description)
            .bind(product.price)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::Execution)?;

        tracing::debug!(
            rows_affected = result.rows_affected(),
            name = %product.name,
            "Product row inserted",
        );

        Ok(())
    }
}
