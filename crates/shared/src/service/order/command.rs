use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{requests::CreateOrderRequest, responses::CreatedResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct OrderCommandService {
    pub command: DynOrderCommandRepository,
    pub metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<CreatedResponse, ServiceError> {
        info!("🆕 Creating order for {:?}", req.name);

        let tracing_ctx = TracingContext::start("create_order");

        match self.command.create_order(req).await {
            Ok(id) => {
                tracing_ctx.complete(&self.metrics, Method::Post, true, "Order created");
                Ok(CreatedResponse { id })
            }
            Err(err) => {
                error!("❌ Failed to create order: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Post, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_order(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting order ID={id}");

        let tracing_ctx = TracingContext::start("delete_order");

        match self.command.delete_order(id).await {
            Ok(0) => {
                warn!("⚠️ Order ID={id} did not exist, nothing deleted");
                tracing_ctx.complete(&self.metrics, Method::Delete, true, "No order deleted");
                Ok(())
            }
            Ok(_) => {
                tracing_ctx.complete(&self.metrics, Method::Delete, true, "Order deleted");
                Ok(())
            }
            Err(err) => {
                error!("❌ Failed to delete order ID={id}: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Delete, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
