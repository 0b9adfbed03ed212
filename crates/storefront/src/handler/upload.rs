use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Multipart, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::{
    abstract_trait::DynUploadService,
    domain::{requests::UploadImageForm, responses::UploadResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

const IMAGE_FIELD: &str = "image";
const DEFAULT_FILE_NAME: &str = "upload";

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored by the image host", body = UploadResponse),
        (status = 400, description = "No image in the request", body = ErrorResponse),
        (status = 500, description = "Image host error", body = ErrorResponse)
    )
)]
pub async fn upload_image(
    Extension(service): Extension<DynUploadService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let (payload, file_name) = match multipart {
        Ok(multipart) => read_image_field(multipart).await?,
        Err(rejection) => {
            warn!("⚠️ Upload body is not multipart: {}", rejection.body_text());
            (None, DEFAULT_FILE_NAME.to_string())
        }
    };

    let response = service.upload_image(payload, &file_name).await?;
    Ok((StatusCode::OK, Json(response)))
}

async fn read_image_field(mut multipart: Multipart) -> Result<(Option<Vec<u8>>, String), HttpError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // a plain text part named `image` is not a file
        let Some(file_name) = field.file_name().map(str::to_string) else {
            warn!("⚠️ Multipart field `{IMAGE_FIELD}` has no file name, skipping");
            continue;
        };
        let bytes = field.bytes().await?;

        return Ok((Some(bytes.to_vec()), file_name));
    }

    Ok((None, DEFAULT_FILE_NAME.to_string()))
}

pub fn upload_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/upload", post(upload_image))
        .layer(Extension(app_state.di_container.upload.clone()))
}
