use super::assembler::DocumentAssembler;
use super::config::ExportConfig;
use super::export::ExportPipeline;
use crate::error::PipelineError;
use vitae_traits::Rasterizer;

/// A builder for creating an [`ExportPipeline`].
#[derive(Debug, Clone, Default)]
pub struct ExportPipelineBuilder {
    config: ExportConfig,
}

impl ExportPipelineBuilder {
    /// Creates a new `ExportPipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration, e.g. with one read from a manifest.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Section id that forces the page break.
    pub fn with_marker_section(mut self, marker: impl Into<String>) -> Self {
        self.config.marker_section = marker.into();
        self
    }

    /// Block count of the first group when the marker section is absent.
    pub fn with_fallback_boundary(mut self, boundary: usize) -> Self {
        self.config.fallback_boundary = boundary;
        self
    }

    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.config.subject_name = Some(name.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.config.compress = compress;
        self
    }

    /// Validates the configuration and creates the pipeline around `rasterizer`.
    pub fn build<R: Rasterizer>(self, rasterizer: R) -> Result<ExportPipeline<R>, PipelineError> {
        self.config.validate()?;
        let assembler = DocumentAssembler::new(rasterizer, self.config.grouper());
        Ok(ExportPipeline::new(assembler, self.config))
    }
}
