use super::assembler::DocumentAssembler;
use super::config::ExportConfig;
use super::filename::export_filename;
use super::manifest::ContentRoot;
use crate::error::PipelineError;
use chrono::Utc;
use log::info;
use std::path::{Path, PathBuf};
use vitae_layout::Document;
use vitae_render_lopdf::{DocumentInfo, PdfDocumentWriter};
use vitae_traits::Rasterizer;

/// The finished export: a PDF and the name it should be saved under.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// The numbered pages the PDF was written from.
    pub document: Document,
}

/// Runs a complete export: assemble, number, write.
///
/// Built with [`ExportPipelineBuilder`](super::ExportPipelineBuilder).
#[derive(Debug)]
pub struct ExportPipeline<R> {
    assembler: DocumentAssembler<R>,
    writer: PdfDocumentWriter,
    config: ExportConfig,
}

impl<R: Rasterizer> ExportPipeline<R> {
    pub(super) fn new(assembler: DocumentAssembler<R>, config: ExportConfig) -> Self {
        let writer = PdfDocumentWriter::new().with_compression(config.compress);
        Self {
            assembler,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn assembler(&self) -> &DocumentAssembler<R> {
        &self.assembler
    }

    /// Exports `root` to an in-memory PDF.
    ///
    /// Fails with [`PipelineError::MissingRenderTarget`] before anything is
    /// rasterized when `root` is `None`. Any later failure drops the pages
    /// built so far; no partial artifact is returned.
    pub async fn export(&self, root: Option<&ContentRoot>) -> Result<ExportArtifact, PipelineError> {
        let root = root.ok_or(PipelineError::MissingRenderTarget)?;
        info!("Exporting {} block(s)", root.blocks().len());

        let document = self.assembler.assemble(root.blocks()).await?;

        let subject = self.config.subject_name.as_deref().or(root.name());
        let filename = export_filename(subject);
        let info = DocumentInfo {
            title: root.document_title(),
            creation_date: Some(Utc::now()),
            ..DocumentInfo::default()
        };
        let bytes = self.writer.clone().with_info(info).to_bytes(&document)?;

        info!("Exported '{}' ({} page(s), {} bytes)", filename, document.total_pages(), bytes.len());
        Ok(ExportArtifact {
            filename,
            bytes,
            page_count: document.total_pages(),
            document,
        })
    }

    /// Exports `root` and saves the PDF under `out_dir`, returning the path written.
    pub async fn export_to_dir(&self, root: Option<&ContentRoot>, out_dir: &Path) -> Result<PathBuf, PipelineError> {
        let artifact = self.export(root).await?;
        tokio::fs::create_dir_all(out_dir).await?;
        let path = out_dir.join(&artifact.filename);
        tokio::fs::write(&path, &artifact.bytes).await?;
        info!("Saved {}", path.display());
        Ok(path)
    }
}
