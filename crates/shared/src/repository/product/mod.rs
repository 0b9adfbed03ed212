mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        config::ConnectionManager,
        domain::requests::{CreateProductRequest, UpdateProductRequest},
    };

    async fn repository() -> ProductRepository {
        let pool = ConnectionManager::new_pool("sqlite::memory:", 1)
            .await
            .unwrap();
        ConnectionManager::bootstrap_schema(&pool).await.unwrap();
        ProductRepository::new(pool)
    }

    fn shirt() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Shirt".into()),
            price: Some(19.99),
            image: Some("http://x/y.png".into()),
        }
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let repo = repository().await;
        let id = repo.command.create_product(&shirt()).await.unwrap();

        let affected = repo
            .command
            .update_product(
                id,
                &UpdateProductRequest {
                    name: Some("Shirt XL".into()),
                    price: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let rows = repo.query.find_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Shirt XL"));
        assert_eq!(rows[0].price, None);
        assert_eq!(rows[0].image, None);
    }

    #[tokio::test]
    async fn missing_id_affects_nothing() {
        let repo = repository().await;

        let updated = repo
            .command
            .update_product(42, &UpdateProductRequest::default())
            .await
            .unwrap();
        let deleted = repo.command.delete_product(42).await.unwrap();

        assert_eq!(updated, 0);
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = repository().await;

        let first = repo.command.create_product(&shirt()).await.unwrap();
        repo.command.delete_product(first).await.unwrap();
        let second = repo.command.create_product(&shirt()).await.unwrap();

        assert!(second > first);
    }
}
