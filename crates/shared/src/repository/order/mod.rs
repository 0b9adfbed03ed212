mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;

        let command =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        config::ConnectionManager,
        domain::requests::CreateOrderRequest,
    };

    async fn repository() -> OrderRepository {
        let pool = ConnectionManager::new_pool("sqlite::memory:", 1)
            .await
            .unwrap();
        ConnectionManager::bootstrap_schema(&pool).await.unwrap();
        OrderRepository::new(pool)
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = repository().await;

        let first = repo
            .command
            .create_order(&CreateOrderRequest::default())
            .await
            .unwrap();
        let second = repo
            .command
            .create_order(&CreateOrderRequest::default())
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn absent_fields_are_stored_as_null() {
        let repo = repository().await;

        let id = repo
            .command
            .create_order(&CreateOrderRequest {
                name: Some("Ana".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let rows = repo.query.find_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name.as_deref(), Some("Ana"));
        assert_eq!(rows[0].email, None);
        assert_eq!(rows[0].address, None);
        assert_eq!(rows[0].quantity, None);
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let repo = repository().await;
        let id = repo
            .command
            .create_order(&CreateOrderRequest::default())
            .await
            .unwrap();

        assert_eq!(repo.command.delete_order(id).await.unwrap(), 1);
        assert_eq!(repo.command.delete_order(id).await.unwrap(), 0);
        assert!(repo.query.find_all().await.unwrap().is_empty());
    }
}
