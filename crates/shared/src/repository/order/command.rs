use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateOrderRequest, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (name, email, address, quantity)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&order.name)
        .bind(&order.email)
        .bind(&order.address)
        .bind(order.quantity)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for {:?}: {:?}", order.name, err);
            RepositoryError::from(err)
        })?;

        let id = result.last_insert_rowid();

        info!("✅ Created order ID {id}");
        Ok(id)
    }

    async fn delete_order(&self, id: i64) -> Result<u64, RepositoryError> {
        info!("❌ Deleting order: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }
}
