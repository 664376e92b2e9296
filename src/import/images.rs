use crate::error::ImageError;
use crate::import::grid::{ImageFile, ProductRow};

pub const MAX_IMAGES_PER_ROW: usize = 8;
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Attaches a batch of files to a row. The whole batch is accepted or the
/// whole batch is rejected; a partial add would silently drop files the
/// user believes were attached. Checks run in a fixed order: image limit,
/// then MIME type for every file, then per-file size.
pub fn add_images(row: &mut ProductRow, files: Vec<ImageFile>) -> Result<(), ImageError> {
    if row.images.len() + files.len() > MAX_IMAGES_PER_ROW {
        return Err(ImageError::TooManyImages {
            current: row.images.len(),
            adding: files.len(),
            limit: MAX_IMAGES_PER_ROW,
        });
    }

    if let Some(bad) = files.iter().find(|f| !f.content_type.starts_with("image/")) {
        return Err(ImageError::UnsupportedType {
            file_name: bad.file_name.clone(),
        });
    }

    if let Some(big) = files.iter().find(|f| f.size() > MAX_IMAGE_BYTES) {
        return Err(ImageError::TooLarge {
            file_name: big.file_name.clone(),
            size: big.size(),
            limit: MAX_IMAGE_BYTES,
        });
    }

    row.images.extend(files);
    Ok(())
}

/// Index-based removal from the row's image list. No undo.
pub fn remove_image(row: &mut ProductRow, index: usize) -> bool {
    if index >= row.images.len() {
        return false;
    }
    row.images.remove(index);
    true
}
