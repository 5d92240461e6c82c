//! Engine seam: the narrow interfaces the orchestration merges through.
//!
//! The content-level merge algorithms live behind two traits so the
//! orchestration can be exercised with fakes and so real engines can be
//! swapped without touching precedence or sequencing logic:
//! - [`ManifestEngine`]: XML manifest merging (no implementation ships
//!   here; the structural merge rules belong to the engine)
//! - [`ResourceEngine`]: resource/asset merging, with a default file-level
//!   overlay implementation in [`overlay`]

pub mod manifest;
pub mod overlay;
pub mod resource;

use thiserror::Error;

pub use manifest::{ManifestEngine, ManifestFeatures, ManifestKind, ManifestReport, MergeType};
pub use overlay::OverlayEngine;
pub use resource::{
    DependencyRecord, ResourceEngine, ResourceMergeOptions, TargetLayout, UnwrittenMerge,
};

/// Failure surface shared by both engine traits.
///
/// `Report` is a semantic merge failure the engine diagnosed (incompatible
/// overrides, forbidden conflicts); the diagnostic travels verbatim to the
/// caller. `Failure` is an infrastructure-level fault in the engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Report(String),

    #[error(transparent)]
    Failure(#[from] anyhow::Error),
}
