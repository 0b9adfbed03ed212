use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/sample.png")]
    pub image_url: String,
}
