use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::import::grid::ProductRow;

/// Expected columns: localized header as written in the merchant-facing
/// template, canonical English key as fallback for older sheets.
const COLUMNS: [(&str, &str); 5] = [
    ("اسم المنتج", "name"),
    ("الوصف", "description"),
    ("السعر", "price"),
    ("نسبة الخصم", "discount_percentage"),
    ("الكمية", "stock_quantity"),
];

/// Decodes an uploaded spreadsheet into raw row maps keyed by column
/// header. Only the first sheet is read. A workbook with no data rows is
/// unrecoverable and reported as `EmptyWorkbook`.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<HashMap<String, String>>> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ClientError::EmptyWorkbook)??;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Err(ClientError::EmptyWorkbook),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut record = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).map(cell_to_string).unwrap_or_default();
            record.insert(header.clone(), value);
        }
        if record.values().any(|v| !v.is_empty()) {
            rows.push(record);
        }
    }

    if rows.is_empty() {
        return Err(ClientError::EmptyWorkbook);
    }

    info!("Parsed {} row(s) from uploaded workbook", rows.len());
    Ok(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        // Whole numbers render without a trailing ".0" so "10" round-trips
        // through the grid the way the user typed it
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Converts raw row maps into grid candidates. Each candidate gets a
/// timestamp-plus-index id, collision-free within one import batch.
pub fn map_rows_to_candidates(raw_rows: &[HashMap<String, String>]) -> Vec<ProductRow> {
    let batch_stamp = chrono::Utc::now().timestamp_millis();

    raw_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let lookup = |localized: &str, canonical: &str| -> String {
                row.get(localized)
                    .filter(|v| !v.is_empty())
                    .or_else(|| row.get(canonical))
                    .cloned()
                    .unwrap_or_default()
            };

            ProductRow {
                id: format!("{}-{}", batch_stamp, index),
                name: lookup(COLUMNS[0].0, COLUMNS[0].1),
                description: lookup(COLUMNS[1].0, COLUMNS[1].1),
                price: lookup(COLUMNS[2].0, COLUMNS[2].1),
                discount_percentage: lookup(COLUMNS[3].0, COLUMNS[3].1),
                stock_quantity: lookup(COLUMNS[4].0, COLUMNS[4].1),
                images: Vec::new(),
            }
        })
        .collect()
}

/// Keeps candidates whose required fields are all present, returning the
/// survivors and how many rows were dropped. Dropped rows are counted, not
/// reported per row number.
pub fn filter_valid_candidates(candidates: Vec<ProductRow>) -> (Vec<ProductRow>, usize) {
    let total = candidates.len();
    let valid: Vec<ProductRow> = candidates
        .into_iter()
        .filter(|row| {
            !row.name.trim().is_empty()
                && !row.description.trim().is_empty()
                && !row.price.trim().is_empty()
                && !row.stock_quantity.trim().is_empty()
        })
        .collect();

    let skipped = total - valid.len();
    if skipped > 0 {
        warn!("Skipped {} incomplete row(s) during import", skipped);
    }
    (valid, skipped)
}

/// Builds the downloadable template workbook: localized headers plus two
/// example rows merchants can overwrite.
pub fn build_template_workbook() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, (localized, _)) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *localized)?;
    }

    let examples: [(&str, &str, f64, f64, f64); 2] = [
        ("قميص قطني", "قميص قطني مريح بأكمام قصيرة", 50.0, 10.0, 25.0),
        ("حذاء رياضي", "حذاء رياضي خفيف الوزن", 120.0, 0.0, 12.0),
    ];
    for (i, (name, description, price, discount, quantity)) in examples.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, *name)?;
        worksheet.write_string(row, 1, *description)?;
        worksheet.write_number(row, 2, *price)?;
        worksheet.write_number(row, 3, *discount)?;
        worksheet.write_number(row, 4, *quantity)?;
    }

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}
