use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &CreateProductRequest) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, image)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {:?}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        let id = result.last_insert_rowid();

        info!("✅ Created product ID {} ({:?})", id, product.name);
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i64,
        product: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?,
                price = ?,
                image = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated product ID {id}");
        Ok(result.rows_affected())
    }

    async fn delete_product(&self, id: i64) -> Result<u64, RepositoryError> {
        info!("❌ Deleting product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }
}
