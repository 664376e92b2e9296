pub mod grid;
pub mod images;
pub mod submission;
pub mod validate;
pub mod workbook;

pub use grid::*;
pub use images::*;
pub use submission::*;
pub use validate::*;
pub use workbook::*;
