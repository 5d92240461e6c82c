//! Stratum - variant source-set merger for Android build inputs
//!
//! This crate merges the manifests and resource/asset trees contributed by
//! an ordered list of source sets (main, build type, flavor, dependency
//! overlays) into one merged manifest and one merged resource tree,
//! applying the precedence semantics a build system uses when composing
//! variant sources. The content-level merge algorithms sit behind engine
//! traits; orchestration and precedence live here.

pub mod core;
pub mod engine;
pub mod ops;
pub mod util;

/// Fake merge engines for Stratum unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides recording fakes for the manifest and
/// resource engine traits.
#[cfg(test)]
pub mod test_support;

pub use core::{resolve_precedence, Ranked, SourceSet};
pub use engine::{
    DependencyRecord, EngineError, ManifestEngine, ManifestFeatures, ManifestKind, ManifestReport,
    MergeType, OverlayEngine, ResourceEngine, ResourceMergeOptions, TargetLayout, UnwrittenMerge,
};
pub use ops::{merge, MergeError, MergeRequest, MergedVariant};
