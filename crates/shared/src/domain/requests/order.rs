use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/order`.
///
/// Every field is optional. Whatever arrives is stored as-is and a missing
/// field becomes `NULL` in the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[schema(example = "Ana")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,

    #[serde(default)]
    #[schema(example = "Calle 1")]
    pub address: Option<String>,

    #[serde(default)]
    #[schema(example = 2)]
    pub quantity: Option<i64>,
}
