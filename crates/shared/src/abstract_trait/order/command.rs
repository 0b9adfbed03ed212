use crate::{
    domain::{requests::CreateOrderRequest, responses::CreatedResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts a row and returns the id the store assigned to it.
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i64, RepositoryError>;
    /// Returns the number of rows removed, zero when the id did not exist.
    async fn delete_order(&self, id: i64) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: &CreateOrderRequest)
    -> Result<CreatedResponse, ServiceError>;
    async fn delete_order(&self, id: i64) -> Result<(), ServiceError>;
}
