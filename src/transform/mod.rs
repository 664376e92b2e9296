pub mod cart;
pub mod identity_images;
pub mod orders;
pub mod products;

pub use cart::*;
pub use identity_images::*;
pub use orders::*;
pub use products::*;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
