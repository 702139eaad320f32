//! PDF output for paginated raster documents, built on `lopdf`.
//!
//! [`PdfDocumentWriter`] writes every page's image window first and then
//! overlays the page-number footers in a second pass, the same order in
//! which the assembler numbers pages.

mod error;
mod image;
mod overlay;
mod writer;

pub use error::RenderError;
pub use overlay::overlay_content;
pub use writer::{DocumentInfo, PdfDocumentWriter};
