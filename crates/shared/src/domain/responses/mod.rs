mod api;
mod order;
mod product;
mod upload;

pub use self::api::{CreatedResponse, MessageResponse, OrderDeletedResponse};
pub use self::order::OrderResponse;
pub use self::product::ProductResponse;
pub use self::upload::UploadResponse;
