use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub quantity: Option<i64>,
}
