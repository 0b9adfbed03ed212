use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_extra::extract::WithRejection;
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{CreatedResponse, MessageResponse, ProductResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "Every stored product", body = Vec<ProductResponse>),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = CreatedResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    WithRejection(Json(body), _): WithRejection<Json<CreateProductRequest>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product replaced, or never existed", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateProductRequest>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_product(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Producto actualizado correctamente")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted, or never existed", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Producto eliminado correctamente")),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products).post(create_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
