mod command;
mod query;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandServiceTrait, OrderQueryServiceTrait},
        config::ConnectionManager,
        domain::requests::CreateOrderRequest,
        repository::OrderRepository,
        utils::Metrics,
    };

    async fn services() -> (OrderCommandService, OrderQueryService) {
        let pool = ConnectionManager::new_pool("sqlite::memory:", 1)
            .await
            .unwrap();
        ConnectionManager::bootstrap_schema(&pool).await.unwrap();
        let repo = OrderRepository::new(pool);
        let metrics = Metrics::new();
        (
            OrderCommandService::new(repo.command, metrics.clone()),
            OrderQueryService::new(repo.query, metrics),
        )
    }

    #[tokio::test]
    async fn created_order_is_listed() {
        let (command, query) = services().await;

        let created = command
            .create_order(&CreateOrderRequest {
                name: Some("Ana".into()),
                email: Some("a@x.com".into()),
                address: Some("Calle 1".into()),
                quantity: Some(2),
            })
            .await
            .unwrap();

        let orders = query.find_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, created.id);
        assert_eq!(orders[0].email.as_deref(), Some("a@x.com"));
        assert_eq!(orders[0].quantity, Some(2));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (command, query) = services().await;

        let created = command
            .create_order(&CreateOrderRequest::default())
            .await
            .unwrap();

        command.delete_order(created.id).await.unwrap();
        command.delete_order(created.id).await.unwrap();
        command.delete_order(12345).await.unwrap();

        assert!(
            query
                .find_all()
                .await
                .unwrap()
                .iter()
                .all(|o| o.id != created.id)
        );
    }
}
