use thiserror::Error;

use crate::import::validate::RowError;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Discriminated error type for the whole client. Every gateway and
/// pipeline function returns one of these kinds so callers can decide the
/// user-facing message without digging through untyped error objects.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("spreadsheet contains no product rows")]
    EmptyWorkbook,

    #[error("failed to read spreadsheet: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("failed to build template workbook: {0}")]
    Template(#[from] rust_xlsxwriter::XlsxError),

    #[error("validation failed for {} row(s)", .errors.len())]
    Validation { errors: Vec<RowError> },

    #[error("cannot attach images: {0}")]
    Image(#[from] ImageError),

    #[error("request failed: {0}")]
    Network(#[from] wreq::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

/// File-constraint failures raised when attaching images to a product row.
/// Any single failure rejects the whole incoming batch; nothing is added
/// partially.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("row already has {current} image(s); adding {adding} would exceed the limit of {limit}")]
    TooManyImages {
        current: usize,
        adding: usize,
        limit: usize,
    },

    #[error("{file_name} is not an image")]
    UnsupportedType { file_name: String },

    #[error("{file_name} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },
}
