//! A [`Rasterizer`](vitae_traits::Rasterizer) that builds each group's image
//! from pre-rendered section snapshots.

mod compose;
mod snapshot;

pub use snapshot::SnapshotRasterizer;
