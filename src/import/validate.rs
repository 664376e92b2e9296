use serde::{Deserialize, Serialize};

use crate::import::grid::ProductRow;

/// Which constraint a row violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowErrorKind {
    NameRequired,
    DescriptionRequired,
    PriceInvalid,
    QuantityInvalid,
    DiscountInvalid,
}

impl std::fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowErrorKind::NameRequired => write!(f, "name is required"),
            RowErrorKind::DescriptionRequired => write!(f, "description is required"),
            RowErrorKind::PriceInvalid => write!(f, "price must be a number greater than zero"),
            RowErrorKind::QuantityInvalid => {
                write!(f, "stock quantity must be a whole number of at least zero")
            }
            RowErrorKind::DiscountInvalid => {
                write!(f, "discount must be a number between 0 and 100")
            }
        }
    }
}

/// A single validation failure, addressed to the row the user has to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row_index: usize,
    pub kind: RowErrorKind,
}

/// Validates every row and collects every failure instead of stopping at
/// the first, so the user can fix all problems in one pass. An empty
/// result means the grid is ready to submit; any error blocks submission
/// entirely.
pub fn validate_rows(rows: &[ProductRow]) -> Vec<RowError> {
    let mut errors = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        let mut push = |kind: RowErrorKind| errors.push(RowError { row_index, kind });

        if row.name.trim().is_empty() {
            push(RowErrorKind::NameRequired);
        }
        if row.description.trim().is_empty() {
            push(RowErrorKind::DescriptionRequired);
        }
        match row.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => {}
            _ => push(RowErrorKind::PriceInvalid),
        }
        // Same type assembly coerces to, so anything accepted here cannot
        // fail or overflow later
        if row.stock_quantity.trim().parse::<u32>().is_err() {
            push(RowErrorKind::QuantityInvalid);
        }
        let discount = row.discount_percentage.trim();
        if !discount.is_empty() {
            match discount.parse::<f64>() {
                Ok(value) if (0.0..=100.0).contains(&value) => {}
                _ => push(RowErrorKind::DiscountInvalid),
            }
        }
    }

    errors
}
