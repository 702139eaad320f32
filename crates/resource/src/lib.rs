//! Resource providers for the vitae export engine.
//!
//! - [`FilesystemResourceProvider`]: snapshots on local disk, resolved
//!   relative to a base directory (usually the manifest's directory).
//! - [`InMemoryResourceProvider`]: re-exported from `vitae-traits`.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
pub use vitae_traits::InMemoryResourceProvider;
