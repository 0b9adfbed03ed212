mod order;
mod product;

pub use self::order::{OrderCommandRepository, OrderQueryRepository, OrderRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository, ProductRepository};
