use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_extra::extract::WithRejection;
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::CreateOrderRequest,
        responses::{CreatedResponse, MessageResponse, OrderDeletedResponse, OrderResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

// Order ids are integer keys, so a segment that is not an integer matches no row.
async fn delete_by_segment(
    service: &DynOrderCommandService,
    segment: &str,
) -> Result<(), HttpError> {
    match segment.parse::<i64>() {
        Ok(id) => Ok(service.delete_order(id).await?),
        Err(_) => {
            warn!("⚠️ Order id {segment:?} is not an integer, nothing deleted");
            Ok(())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/order",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreatedResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    WithRejection(Json(body), _): WithRejection<Json<CreateOrderRequest>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "Every stored order", body = Vec<OrderResponse>),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/order/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID, echoed back as given")),
    responses(
        (status = 200, description = "Order deleted, or never existed", body = OrderDeletedResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    WithRejection(Path(id), _): WithRejection<Path<String>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    delete_by_segment(&service, &id).await?;

    Ok((
        StatusCode::OK,
        Json(OrderDeletedResponse {
            message: "Orden eliminada".to_string(),
            deleted_id: id,
        }),
    ))
}

// Same operation as `delete_order`, kept because clients still call it
// with the plural path and expect the shorter body.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted, or never existed", body = MessageResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn delete_order_legacy(
    Extension(service): Extension<DynOrderCommandService>,
    WithRejection(Path(id), _): WithRejection<Path<String>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    delete_by_segment(&service, &id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Orden eliminada correctamente")),
    ))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/order", post(create_order))
        .route("/api/orders", get(get_orders))
        .route("/api/order/{id}", delete(delete_order))
        .route("/api/orders/{id}", delete(delete_order_legacy))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
}
