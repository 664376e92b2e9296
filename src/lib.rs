//! Client toolkit for the TMC marketplace backend: a typed API gateway,
//! defensive view-model transformers, and the bulk product import pipeline
//! (spreadsheet parse -> row validation -> image batching -> multipart upload).

pub mod api;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod transform;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
