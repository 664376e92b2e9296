use crate::models::{CartItemView, ProductView};
use crate::transform::round2;

const CART_THUMBNAIL_GLYPH: &str = "📦";

/// Maps a catalog product plus a chosen quantity onto a cart line. Uses the
/// discounted display price; the backend recomputes the authoritative
/// total at checkout.
pub fn to_cart_item(product: &ProductView, quantity: u32) -> CartItemView {
    let image = product
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| CART_THUMBNAIL_GLYPH.to_string());

    CartItemView {
        product_id: product.id.clone(),
        name: product.name.clone(),
        image,
        unit_price: product.final_price,
        quantity,
        total: round2(product.final_price * quantity as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductView {
        ProductView {
            id: "5".to_string(),
            name: "Shirt".to_string(),
            description: String::new(),
            price: 80.0,
            discount_percentage: Some(25.0),
            final_price: 60.0,
            stock_quantity: 10,
            images: vec!["https://tmc.example/uploads/a.jpg".to_string()],
        }
    }

    #[test]
    fn test_cart_line_uses_discounted_price() {
        let line = to_cart_item(&product(), 3);
        assert_eq!(line.unit_price, 60.0);
        assert_eq!(line.total, 180.0);
        assert_eq!(line.image, "https://tmc.example/uploads/a.jpg");
    }

    #[test]
    fn test_cart_line_without_images_gets_placeholder() {
        let mut p = product();
        p.images.clear();
        let line = to_cart_item(&p, 1);
        assert_eq!(line.image, "📦");
    }
}
