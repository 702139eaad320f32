//! Where block snapshots come from.
//!
//! The snapshot rasterizer asks a `ResourceProvider` for the bytes behind a
//! block's `source` URI, so the same engine runs against the filesystem,
//! an in-memory store in tests, or anything else a caller plugs in.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use vitae_types::ResourceUri;

#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },
}

/// Reference-counted resource bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads the bytes stored under `uri`.
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError>;

    /// A human-readable name for log lines.
    fn name(&self) -> &'static str;
}

/// A provider backed by a map, populated up front.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<ResourceUri, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `uri`, replacing any previous entry.
    pub fn insert(&self, uri: impl Into<ResourceUri>, data: Vec<u8>) -> Result<(), ResourceError> {
        let uri = uri.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: uri.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(uri, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: uri.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(uri)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(uri.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
