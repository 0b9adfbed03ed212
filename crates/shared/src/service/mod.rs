mod order;
mod product;
mod upload;

pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::upload::{MISSING_IMAGE_MESSAGE, UploadService};
