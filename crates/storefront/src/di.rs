use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        DynOrderCommandService, DynOrderQueryService, DynProductCommandService,
        DynProductQueryService, DynUploadGateway, DynUploadService,
    },
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository},
    service::{
        OrderCommandService, OrderQueryService, ProductCommandService, ProductQueryService,
        UploadService,
    },
    utils::Metrics,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub upload: DynUploadService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .field("product_command", &"ProductCommandService")
            .field("product_query", &"ProductQueryService")
            .field("upload", &"UploadService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub gateway: DynUploadGateway,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { pool, gateway } = deps;

        let metrics = Metrics::new();
        metrics.register("storefront", registry);

        let order_repo = OrderRepository::new(pool.clone());
        let product_repo = ProductRepository::new(pool);

        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            order_repo.command,
            metrics.clone(),
        ));
        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_repo.query, metrics.clone()));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_repo.command,
            metrics.clone(),
        ));
        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_repo.query,
            metrics.clone(),
        ));

        let upload: DynUploadService = Arc::new(UploadService::new(gateway, metrics));

        Self {
            order_command,
            order_query,
            product_command,
            product_query,
            upload,
        }
    }
}
