#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use vitae::{ContentRoot, ExportArtifact, ExportPipelineBuilder, PipelineError, Rasterizer};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Footer strings, one per page in page order
    pub fn footers(&self) -> Vec<String> {
        pdf_assertions::shown_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Export `root` with default settings on a fresh runtime.
pub fn export_with<R: Rasterizer>(rasterizer: R, root: Option<&ContentRoot>) -> Result<ExportArtifact, PipelineError> {
    let pipeline = ExportPipelineBuilder::new().build(rasterizer)?;
    tokio::runtime::Runtime::new()?.block_on(pipeline.export(root))
}

/// Export and reload the resulting PDF.
pub fn export_pdf<R: Rasterizer>(
    rasterizer: R,
    root: &ContentRoot,
) -> Result<(ExportArtifact, GeneratedPdf), Box<dyn std::error::Error>> {
    let artifact = export_with(rasterizer, Some(root))?;
    let pdf = GeneratedPdf::from_bytes(artifact.bytes.clone())?;
    Ok((artifact, pdf))
}
