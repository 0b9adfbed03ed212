use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_products");

        match self.query.find_all().await {
            Ok(products) => {
                tracing_ctx.complete(&self.metrics, Method::Get, true, "Products fetched");
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(err) => {
                error!("❌ Failed to fetch products: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Get, false, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
