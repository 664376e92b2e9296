use serde::Serialize;
use tracing::info;

use crate::error::{ClientError, Result};
use crate::import::grid::{ImageFile, ProductRow};
use crate::import::validate::validate_rows;

/// Sanitized product fields as the backend expects them in the multipart
/// form. `images_count` tells the backend how many entries of the flat
/// image list belong to this product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDescriptor {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(rename = "imagesCount")]
    pub images_count: usize,
}

/// One bulk upload, assembled from the grid in display order. Image
/// association is positional: the backend re-slices `images` using each
/// descriptor's `images_count`, so descriptor order and image order must
/// both mirror the grid at assembly time. Row order is frozen here and
/// must not change before the upload is sent.
#[derive(Debug, Clone)]
pub struct BulkProductSubmission {
    pub store_id: i64,
    pub products: Vec<ProductDescriptor>,
    pub images: Vec<ImageFile>,
}

impl BulkProductSubmission {
    /// Holds by construction; exposed so callers and tests can assert it.
    pub fn image_counts_consistent(&self) -> bool {
        self.products.iter().map(|p| p.images_count).sum::<usize>() == self.images.len()
    }
}

/// Validates the grid and flattens it into a submission. Fail-closed: any
/// validation error aborts before a single field is coerced, and no
/// network call is made.
pub fn assemble(store_id: i64, rows: &[ProductRow]) -> Result<BulkProductSubmission> {
    let errors = validate_rows(rows);
    if !errors.is_empty() {
        return Err(ClientError::Validation { errors });
    }

    let mut products = Vec::with_capacity(rows.len());
    let mut images = Vec::new();

    for row in rows {
        // Parses cannot fail here: validate_rows accepted every row
        let price = row.price.trim().parse::<f64>().unwrap_or_default();
        let stock_quantity = row.stock_quantity.trim().parse::<u32>().unwrap_or_default();
        let discount = row.discount_percentage.trim();
        let discount_percentage = if discount.is_empty() {
            None
        } else {
            discount.parse::<f64>().ok()
        };

        products.push(ProductDescriptor {
            name: row.name.trim().to_string(),
            description: row.description.trim().to_string(),
            price,
            stock_quantity,
            discount_percentage,
            images_count: row.images.len(),
        });
        images.extend(row.images.iter().cloned());
    }

    info!(
        "Assembled submission for store {}: {} product(s), {} image(s)",
        store_id,
        products.len(),
        images.len()
    );

    Ok(BulkProductSubmission {
        store_id,
        products,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, image_count: usize) -> ProductRow {
        ProductRow {
            id: name.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price: "25.5".to_string(),
            discount_percentage: "10".to_string(),
            stock_quantity: "4".to_string(),
            images: (0..image_count)
                .map(|i| ImageFile::new(format!("{}-{}.jpg", name, i), "image/jpeg", vec![0u8; 8]))
                .collect(),
        }
    }

    #[test]
    fn test_image_count_invariant() {
        let rows = [row("a", 3), row("b", 0), row("c", 5)];
        let submission = assemble(7, &rows).unwrap();

        assert!(submission.image_counts_consistent());
        assert_eq!(submission.images.len(), 8);
        assert_eq!(submission.products[0].images_count, 3);
        assert_eq!(submission.products[1].images_count, 0);
        assert_eq!(submission.products[2].images_count, 5);
    }

    #[test]
    fn test_images_preserve_row_and_per_row_order() {
        let rows = [row("a", 2), row("b", 1)];
        let submission = assemble(7, &rows).unwrap();

        let names: Vec<_> = submission
            .images
            .iter()
            .map(|i| i.file_name.as_str())
            .collect();
        assert_eq!(names, ["a-0.jpg", "a-1.jpg", "b-0.jpg"]);
    }

    #[test]
    fn test_invalid_grid_blocks_assembly() {
        let mut bad = row("a", 0);
        bad.price = "-3".to_string();

        let err = assemble(7, &[row("ok", 1), bad]).unwrap_err();
        match err {
            ClientError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].row_index, 1);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_quantity_is_blocked_not_zeroed() {
        // 2^32 does not fit the descriptor's stock type; assembly must
        // refuse the grid instead of uploading stock 0
        let mut r = row("a", 0);
        r.stock_quantity = "4294967296".to_string();

        match assemble(7, &[r]) {
            Err(ClientError::Validation { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].row_index, 0);
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_numeric_coercion_and_trimming() {
        let mut r = row("a", 0);
        r.name = "  Shirt  ".to_string();
        r.discount_percentage = String::new();

        let submission = assemble(1, &[r]).unwrap();
        let product = &submission.products[0];
        assert_eq!(product.name, "Shirt");
        assert_eq!(product.price, 25.5);
        assert_eq!(product.stock_quantity, 4);
        assert!(product.discount_percentage.is_none());
    }

    #[test]
    fn test_descriptor_serializes_images_count_camel_case() {
        let submission = assemble(1, &[row("a", 2)]).unwrap();
        let json = serde_json::to_value(&submission.products).unwrap();
        assert_eq!(json[0]["imagesCount"], 2);
        assert_eq!(json[0]["discount_percentage"], 10.0);
    }
}
