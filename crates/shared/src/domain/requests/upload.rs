use utoipa::ToSchema;

/// Multipart body of `POST /api/upload`. Only used for the OpenAPI document.
#[derive(Debug, ToSchema)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
