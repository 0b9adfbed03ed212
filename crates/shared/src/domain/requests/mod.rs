mod order;
mod product;
mod upload;

pub use self::order::CreateOrderRequest;
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::upload::UploadImageForm;
