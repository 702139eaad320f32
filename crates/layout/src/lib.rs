//! Page layout for raster exports.
//!
//! Everything here works on already-rendered images: the grouper decides
//! where the forced page break falls, the scaler fits each image to the page
//! width, and the paginator cuts tall images into overlapping page windows.
//! [`Document::number`] is the second pass that stamps page numbers once the
//! total is known.

pub mod algorithms;
pub mod document;
pub mod grouper;
pub mod scaler;

pub use algorithms::pagination::{MAX_PAGES_PER_IMAGE, OVERLAP_STEP_RATIO, Paginator, page_offsets};
pub use document::{Document, Footer, Page, Placement, footer_text};
pub use grouper::SectionGrouper;
pub use scaler::{PageScaler, ScaledImage};
