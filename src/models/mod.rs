pub mod auth;
pub mod order;
pub mod product;
pub mod shipping;
pub mod store;

pub use auth::*;
pub use order::*;
pub use product::*;
pub use shipping::*;
pub use store::*;
