use std::path::Path;

use tracing::info;

/// Binary image handle attached to a product row before upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        ImageFile {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(ImageFile {
            file_name,
            content_type,
            data,
        })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// One editable row of the import grid. Numeric fields stay strings until
/// validation so the user sees exactly what they typed or imported.
#[derive(Debug, Clone, Default)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_percentage: String,
    pub stock_quantity: String,
    pub images: Vec<ImageFile>,
}

impl ProductRow {
    pub fn blank(id: impl Into<String>) -> Self {
        ProductRow {
            id: id.into(),
            ..ProductRow::default()
        }
    }

    /// A row counts as blank when every textual field is empty after
    /// trimming. Blank rows are pruned before an import merge.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.description.trim().is_empty()
            && self.price.trim().is_empty()
            && self.stock_quantity.trim().is_empty()
    }
}

/// The product editing grid. Sole owner of the rows between import and
/// submission; all mutations are synchronous whole-array operations.
/// Invariant: the grid always holds at least one row.
#[derive(Debug, Clone)]
pub struct ProductGrid {
    rows: Vec<ProductRow>,
    next_row_index: u64,
}

impl ProductGrid {
    pub fn new() -> Self {
        let mut grid = ProductGrid {
            rows: Vec::new(),
            next_row_index: 0,
        };
        let id = grid.next_id();
        grid.rows.push(ProductRow::blank(id));
        grid
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut ProductRow> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Timestamp-plus-counter id, collision-free within one grid session.
    fn next_id(&mut self) -> String {
        let id = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            self.next_row_index
        );
        self.next_row_index += 1;
        id
    }

    pub fn add_row(&mut self) -> &ProductRow {
        let id = self.next_id();
        self.rows.push(ProductRow::blank(id));
        self.rows.last().unwrap()
    }

    /// Removes the row at `index`. Deleting the last remaining row is a
    /// no-op: the grid never drops below one row. Returns whether a row
    /// was actually removed.
    pub fn delete_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Merges imported candidates into the grid. Pre-existing rows that are
    /// entirely blank are discarded first so an import never leaves a stray
    /// empty row mixed in with real data.
    pub fn merge_imported(&mut self, candidates: Vec<ProductRow>) {
        if candidates.is_empty() {
            return;
        }
        let before = self.rows.len();
        self.rows.retain(|row| !row.is_blank());
        let discarded = before - self.rows.len();
        if discarded > 0 {
            info!("Discarded {} blank row(s) before import merge", discarded);
        }
        self.rows.extend(candidates);
    }

    /// Resets to a single blank row. Called only after a successful
    /// submission; on failure the grid is left untouched for retry.
    pub fn reset(&mut self) {
        self.rows.clear();
        let id = self.next_id();
        self.rows.push(ProductRow::blank(id));
    }
}

impl Default for ProductGrid {
    fn default() -> Self {
        ProductGrid::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(name: &str) -> ProductRow {
        ProductRow {
            id: "test".to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            price: "10".to_string(),
            discount_percentage: String::new(),
            stock_quantity: "5".to_string(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_new_grid_has_one_blank_row() {
        let grid = ProductGrid::new();
        assert_eq!(grid.len(), 1);
        assert!(grid.rows()[0].is_blank());
    }

    #[test]
    fn test_deleting_last_row_is_a_no_op() {
        let mut grid = ProductGrid::new();
        assert!(!grid.delete_row(0));
        assert_eq!(grid.len(), 1);

        grid.add_row();
        assert!(grid.delete_row(0));
        assert_eq!(grid.len(), 1);
        // Back down to one row, floor applies again
        assert!(!grid.delete_row(0));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let mut grid = ProductGrid::new();
        grid.add_row();
        assert!(!grid.delete_row(5));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_merge_discards_blank_rows() {
        let mut grid = ProductGrid::new();
        grid.merge_imported(vec![filled_row("a"), filled_row("b")]);

        // The initial blank row is gone, only imported rows remain
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.rows()[0].name, "a");
        assert_eq!(grid.rows()[1].name, "b");
    }

    #[test]
    fn test_merge_keeps_filled_rows() {
        let mut grid = ProductGrid::new();
        grid.row_mut(0).unwrap().name = "manual".to_string();
        grid.row_mut(0).unwrap().description = "d".to_string();
        grid.merge_imported(vec![filled_row("imported")]);

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.rows()[0].name, "manual");
        assert_eq!(grid.rows()[1].name, "imported");
    }

    #[test]
    fn test_merge_with_no_candidates_keeps_grid() {
        let mut grid = ProductGrid::new();
        grid.merge_imported(Vec::new());
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_row_ids_are_unique() {
        let mut grid = ProductGrid::new();
        for _ in 0..50 {
            grid.add_row();
        }
        let mut ids: Vec<_> = grid.rows().iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 51);
    }

    #[test]
    fn test_reset_returns_to_single_blank_row() {
        let mut grid = ProductGrid::new();
        grid.merge_imported(vec![filled_row("a"), filled_row("b")]);
        grid.reset();
        assert_eq!(grid.len(), 1);
        assert!(grid.rows()[0].is_blank());
    }
}
