mod order;
mod product;

pub use self::order::Order;
pub use self::product::Product;
