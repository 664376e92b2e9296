use serde_json::Value;

use crate::config::ClientConfig;
use crate::models::ProductView;
use crate::transform::round2;

/// Decodes a backend `images` field into relative paths. The field arrives
/// either as a plain array or, on products written by an older importer,
/// as a JSON-encoded string of that same array. Entries may be bare path
/// strings or objects carrying a `path`/`url` field. Anything unparseable
/// degrades to an empty list.
pub fn parse_image_array(value: Option<&Value>) -> Vec<String> {
    let value = match value {
        Some(v) => v,
        None => return Vec::new(),
    };

    let entries = match value {
        Value::Array(entries) => entries.clone(),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(path) => Some(path.clone()),
            Value::Object(obj) => obj
                .get("path")
                .or_else(|| obj.get("url"))
                .and_then(|p| p.as_str())
                .map(|p| p.to_string()),
            _ => None,
        })
        .collect()
}

/// Flattens a backend product into its catalog view: tolerant numeric
/// coercion, dual-encoded image list, absolute image URLs, and a display
/// final price with the discount applied.
pub fn transform_product(value: &Value, config: &ClientConfig) -> ProductView {
    let id = match value.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    let get_string = |key: &str| -> String {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    };
    let get_number = |key: &str| -> Option<f64> {
        match value.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    };

    let price = get_number("price").unwrap_or(0.0);
    let discount_percentage = get_number("discount_percentage").filter(|d| *d > 0.0);
    let final_price = match discount_percentage {
        Some(discount) => round2(price * (1.0 - discount / 100.0)),
        None => price,
    };

    let images = parse_image_array(value.get("images"))
        .iter()
        .map(|path| config.absolute_image_url(path))
        .collect();

    ProductView {
        id,
        name: get_string("name"),
        description: get_string("description"),
        price,
        discount_percentage,
        final_price,
        stock_quantity: get_number("stock_quantity").unwrap_or(0.0) as u32,
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new("https://tmc.example")
    }

    #[test]
    fn test_image_array_current_encoding() {
        let value = json!(["/uploads/a.jpg", {"path": "/uploads/b.jpg"}]);
        assert_eq!(
            parse_image_array(Some(&value)),
            vec!["/uploads/a.jpg", "/uploads/b.jpg"]
        );
    }

    #[test]
    fn test_image_array_double_encoded() {
        let value = json!(r#"["/uploads/a.jpg","/uploads/b.jpg"]"#);
        assert_eq!(
            parse_image_array(Some(&value)),
            vec!["/uploads/a.jpg", "/uploads/b.jpg"]
        );
    }

    #[test]
    fn test_image_array_garbage_degrades_to_empty() {
        assert!(parse_image_array(Some(&json!("{{broken"))).is_empty());
        assert!(parse_image_array(Some(&json!(17))).is_empty());
        assert!(parse_image_array(None).is_empty());
    }

    #[test]
    fn test_product_with_discount() {
        let value = json!({
            "id": 11,
            "name": "Shirt",
            "description": "Cotton shirt",
            "price": "80.00",
            "discount_percentage": 25,
            "stock_quantity": 3,
            "images": ["/uploads/products/shirt.jpg"]
        });

        let view = transform_product(&value, &config());
        assert_eq!(view.id, "11");
        assert_eq!(view.price, 80.0);
        assert_eq!(view.final_price, 60.0);
        assert_eq!(view.stock_quantity, 3);
        assert_eq!(
            view.images,
            vec!["https://tmc.example/uploads/products/shirt.jpg"]
        );
    }

    #[test]
    fn test_product_without_discount_keeps_price() {
        let value = json!({ "id": 1, "name": "Mug", "price": 12.5 });
        let view = transform_product(&value, &config());
        assert!(view.discount_percentage.is_none());
        assert_eq!(view.final_price, 12.5);
        assert!(view.images.is_empty());
    }

    #[test]
    fn test_zero_discount_is_treated_as_none() {
        let value = json!({ "id": 1, "price": 10, "discount_percentage": 0 });
        let view = transform_product(&value, &config());
        assert!(view.discount_percentage.is_none());
        assert_eq!(view.final_price, 10.0);
    }
}
