use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::OrderResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryService {
    pub query: DynOrderQueryRepository,
    pub metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_orders");

        match self.query.find_all().await {
            Ok(orders) => {
                tracing_ctx.complete(&self.metrics, Method::Get, true, "Orders fetched");
                Ok(orders.into_iter().map(OrderResponse::from).collect())
            }
            Err(err) => {
                error!("❌ Failed to fetch orders: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Get, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
