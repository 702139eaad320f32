use super::config::ExportConfig;
use crate::error::PipelineError;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use vitae_types::ContentBlock;

/// One resume section: its id and the resource that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub source: String,
}

/// A resume manifest as stored on disk.
///
/// ```json
/// { "name": "Jane Doe", "title": "Engineer",
///   "sections": [{ "id": "profile", "source": "profile.png" }],
///   "config": { "fallback_boundary": 4 } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub config: ExportConfig,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a manifest file. A file that does not exist means there is
    /// nothing to render.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Manifest '{}' does not exist", path.display());
                return Err(PipelineError::MissingRenderTarget);
            }
            Err(e) => {
                return Err(PipelineError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to read manifest from '{}': {}", path.display(), e),
                )));
            }
        };
        let manifest = Self::from_json(&source)?;
        debug!("Loaded manifest '{}' with {} section(s)", path.display(), manifest.sections.len());
        Ok(manifest)
    }

    pub fn content_root(&self) -> ContentRoot {
        let blocks = ContentBlock::sequence(self.sections.iter().map(|s| (s.id.as_str(), s.source.as_str())));
        ContentRoot {
            blocks,
            name: self.name.clone(),
            title: self.title.clone(),
        }
    }
}

/// The rendered resume content to export, in display order.
#[derive(Debug, Clone, Default)]
pub struct ContentRoot {
    blocks: Vec<ContentBlock>,
    name: Option<String>,
    title: Option<String>,
}

impl ContentRoot {
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `"{name} - {title}"`, or whichever half is present.
    pub fn document_title(&self) -> Option<String> {
        match (self.name(), self.title.as_deref()) {
            (Some(name), Some(title)) => Some(format!("{} - {}", name, title)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}
