// src/error.rs
use thiserror::Error;
use vitae_render_lopdf::RenderError;
use vitae_traits::RasterError;

const RETRY_MESSAGE: &str = "Failed to generate PDF. Please try again.";

/// Errors surfaced by an export.
///
/// Every variant aborts the export; pages assembled before the failure are
/// dropped and no artifact is produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Nothing to export: the content root is absent or the manifest file
    /// does not exist. Raised before any rasterization starts.
    #[error("Render target not found")]
    MissingRenderTarget,

    #[error("Rasterization failed: {0}")]
    Rasterization(#[from] RasterError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// The message to show the person who requested the export.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::MissingRenderTarget => "Content not found.".to_string(),
            PipelineError::Rasterization(_) | PipelineError::Render(_) | PipelineError::Io(_) => {
                RETRY_MESSAGE.to_string()
            }
            PipelineError::Manifest(e) => format!("The resume manifest could not be read: {}", e),
            PipelineError::Config(msg) => format!("Invalid export configuration: {}", msg),
        }
    }

    /// Whether running the same export again could succeed. Nothing retries
    /// automatically.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PipelineError::Rasterization(_) | PipelineError::Render(_) | PipelineError::Io(_)
        )
    }
}
