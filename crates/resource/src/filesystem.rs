//! Filesystem-backed snapshot loading.
//!
//! Paths are resolved against a base directory and must stay inside it:
//! absolute paths and `..` components are rejected before touching disk.

use log::debug;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use vitae_traits::{ResourceError, ResourceProvider, SharedResourceData};
use vitae_types::ResourceUri;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        let canonical_base = base_path.canonicalize().ok();
        Self {
            base_path,
            canonical_base,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns the on-disk path for `uri`, or `None` when it would escape the base.
    fn resolve(&self, uri: &ResourceUri) -> Option<PathBuf> {
        let relative = Path::new(uri.as_str());
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);
        if let (Ok(canonical), Some(base)) = (full_path.canonicalize(), &self.canonical_base) {
            // Symlinks can still point outside the base.
            return canonical.starts_with(base).then_some(canonical);
        }
        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError> {
        let path = self
            .resolve(uri)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside base directory)", uri)))?;
        debug!("Loading snapshot {} from {}", uri, path.display());

        std::fs::read(&path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(uri.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: uri.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_relative_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("profile.png"), b"bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load(&ResourceUri::new("profile.png")).unwrap();
        assert_eq!(&*data, b"bytes");
    }

    #[test]
    fn loads_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("snapshots")).unwrap();
        fs::write(dir.path().join("snapshots/skills.png"), b"nested").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load(&ResourceUri::new("snapshots/skills.png")).unwrap();
        assert_eq!(&*data, b"nested");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load(&ResourceUri::new("missing.png"));
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn rejects_traversal_and_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load(&ResourceUri::new("../../etc/passwd")).is_err());
        assert!(provider.load(&ResourceUri::new("/etc/passwd")).is_err());
        assert!(provider.load(&ResourceUri::new("a/../../b")).is_err());
    }
}
