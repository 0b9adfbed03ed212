use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(example = "Shirt")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = 19.99)]
    pub price: Option<f64>,

    #[serde(default)]
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/shirt.png")]
    pub image: Option<String>,
}

/// Body of `PUT /api/products/{id}`.
///
/// This is a full replace, not a patch: a field left out of the body
/// overwrites the stored value with `NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(example = "Shirt XL")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = 24.99)]
    pub price: Option<f64>,

    #[serde(default)]
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/shirt.png")]
    pub image: Option<String>,
}
