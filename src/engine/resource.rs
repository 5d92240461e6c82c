//! Resource-merge engine interface and dependency records.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::engine::EngineError;

/// One source set's contribution to a resource merge, in engine terms.
///
/// Records are handed to the engine highest precedence first. The manifest
/// path is always populated: a source set that declares no manifest of its
/// own carries the already-merged manifest instead, which is why the
/// manifest phase must run before the resource phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Resource directories, in declaration order
    pub resource_dirs: Vec<PathBuf>,

    /// Asset directories, in declaration order
    pub asset_dirs: Vec<PathBuf>,

    /// This record's manifest, or the merged-manifest fallback
    pub manifest: PathBuf,
}

/// Conflict policy for a resource merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMergeOptions {
    /// When true, primary-layer data unconditionally replaces colliding
    /// transitive/direct data. When false, such collisions are errors.
    pub primary_overrides_all: bool,

    /// When true, any collision at all is an error instead of resolving
    /// by precedence.
    pub throw_on_resource_conflict: bool,
}

/// Output layout for a written resource merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    /// Where manifest-adjacent artifacts land
    pub manifest_dir: PathBuf,

    /// Where merged resources land
    pub resource_dir: PathBuf,

    /// Where merged assets land
    pub asset_dir: PathBuf,
}

impl TargetLayout {
    /// The conventional layout under an output root: `res/` and `assets/`
    /// subdirectories, manifest artifacts at the root itself.
    pub fn under(root: &Path) -> Self {
        TargetLayout {
            manifest_dir: root.to_path_buf(),
            resource_dir: root.join("res"),
            asset_dir: root.join("assets"),
        }
    }
}

/// A computed resource merge, not yet written to disk.
pub trait UnwrittenMerge {
    /// Materialize the merge under `layout`.
    ///
    /// Returns only after every file is written or one write failed; a
    /// failure leaves the output in an undefined partial state.
    fn write(&self, layout: &TargetLayout) -> Result<()>;
}

/// Capability interface for resource/asset merging.
///
/// The three layers carry precedence `transitive < direct < primary`;
/// any layer may be empty. Within a layer, records are ordered highest
/// precedence first.
pub trait ResourceEngine {
    fn merge(
        &self,
        transitive: &[DependencyRecord],
        direct: &[DependencyRecord],
        primary: &[DependencyRecord],
        options: &ResourceMergeOptions,
    ) -> Result<Box<dyn UnwrittenMerge>, EngineError>;
}
