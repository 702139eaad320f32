use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use vitae_layout::SectionGrouper;
use vitae_layout::grouper::{DEFAULT_BREAK_SECTION, DEFAULT_FALLBACK_BOUNDARY};

/// Tunables for an export. Raster options are fixed and deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Section id that starts the second page group.
    pub marker_section: String,
    /// Number of blocks in the first group when the marker is absent.
    pub fallback_boundary: usize,
    /// Name used for the output filename; overrides the content root's name.
    pub subject_name: Option<String>,
    /// Flate-compress image and content streams.
    pub compress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            marker_section: DEFAULT_BREAK_SECTION.to_string(),
            fallback_boundary: DEFAULT_FALLBACK_BOUNDARY,
            subject_name: None,
            compress: true,
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.marker_section.trim().is_empty() {
            return Err(PipelineError::Config("marker_section must not be empty".to_string()));
        }
        Ok(())
    }

    pub(crate) fn grouper(&self) -> SectionGrouper {
        SectionGrouper::new(self.marker_section.as_str(), self.fallback_boundary)
    }
}
