use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::CreatedResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i64, RepositoryError>;
    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<CreatedResponse, ServiceError>;
    async fn update_product(&self, id: i64, req: &UpdateProductRequest)
    -> Result<(), ServiceError>;
    async fn delete_product(&self, id: i64) -> Result<(), ServiceError>;
}
