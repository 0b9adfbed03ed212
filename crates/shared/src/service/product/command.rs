use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::CreatedResponse,
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<CreatedResponse, ServiceError> {
        info!("🆕 Creating product: {:?}", req.name);

        let tracing_ctx = TracingContext::start("create_product");

        match self.command.create_product(req).await {
            Ok(id) => {
                tracing_ctx.complete(&self.metrics, Method::Post, true, "Product created");
                Ok(CreatedResponse { id })
            }
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Post, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<(), ServiceError> {
        info!("✏️ Updating product ID={id}");

        let tracing_ctx = TracingContext::start("update_product");

        match self.command.update_product(id, req).await {
            Ok(0) => {
                warn!("⚠️ Product ID={id} did not exist, nothing updated");
                tracing_ctx.complete(&self.metrics, Method::Put, true, "No product updated");
                Ok(())
            }
            Ok(_) => {
                tracing_ctx.complete(&self.metrics, Method::Put, true, "Product updated");
                Ok(())
            }
            Err(err) => {
                error!("❌ Failed to update product ID={id}: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Put, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID={id}");

        let tracing_ctx = TracingContext::start("delete_product");

        match self.command.delete_product(id).await {
            Ok(0) => {
                warn!("⚠️ Product ID={id} did not exist, nothing deleted");
                tracing_ctx.complete(&self.metrics, Method::Delete, true, "No product deleted");
                Ok(())
            }
            Ok(_) => {
                tracing_ctx.complete(&self.metrics, Method::Delete, true, "Product deleted");
                Ok(())
            }
            Err(err) => {
                error!("❌ Failed to delete product ID={id}: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Delete, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
