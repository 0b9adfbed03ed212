use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub quantity: Option<i64>,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            address: value.address,
            quantity: value.quantity,
        }
    }
}
