//! Source sets: the per-variant input bundles fed to the merge.
//!
//! A source set is one axis of a build variant (main, build type, flavor,
//! or a library dependency overlay): an optional manifest plus ordered
//! resource and asset directories. Source sets are pure data: the
//! orchestration only ever reads them.

use std::path::{Path, PathBuf};

use crate::ops::errors::MergeError;

/// Expected format for [`SourceSet::from_spec`] input strings.
pub const SOURCE_SET_FORMAT: &str = "resources:assets:manifest";

/// An ordered, named bundle of variant build inputs.
///
/// Immutable once constructed. The caller-declared order of source sets in
/// a list is semantically significant: later entries are more specific
/// overlays (see [`crate::core::precedence`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    /// Display name, used in logs and conflict diagnostics
    name: String,

    /// Manifest file, if this source set declares one
    manifest: Option<PathBuf>,

    /// Resource directories, in declaration order
    resource_dirs: Vec<PathBuf>,

    /// Asset directories, in declaration order
    asset_dirs: Vec<PathBuf>,
}

impl SourceSet {
    /// Create an empty source set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        SourceSet {
            name: name.into(),
            manifest: None,
            resource_dirs: Vec::new(),
            asset_dirs: Vec::new(),
        }
    }

    /// Set the manifest file.
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    /// Append a resource directory.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dirs.push(dir.into());
        self
    }

    /// Append an asset directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dirs.push(dir.into());
        self
    }

    /// Parse a source set from a `resources:assets:manifest` spec string.
    ///
    /// Each chunk is a path relative to `root`; empty chunks contribute
    /// nothing. The manifest chunk only contributes a manifest if the file
    /// actually exists, matching the convention of build rules that pass a
    /// fixed spec shape whether or not a variant declares a manifest.
    pub fn from_spec(name: impl Into<String>, root: &Path, spec: &str) -> Result<Self, MergeError> {
        let chunks: Vec<&str> = spec.split(':').collect();
        if chunks.len() != 3 {
            return Err(MergeError::InvalidSourceSetSpec {
                spec: spec.to_string(),
            });
        }

        let to_dirs = |chunk: &str| -> Vec<PathBuf> {
            if chunk.trim().is_empty() {
                Vec::new()
            } else {
                vec![root.join(chunk)]
            }
        };

        let manifest_chunk = chunks[2].trim();
        let manifest = if manifest_chunk.is_empty() {
            None
        } else {
            let path = root.join(manifest_chunk);
            path.is_file().then_some(path)
        };

        Ok(SourceSet {
            name: name.into(),
            manifest,
            resource_dirs: to_dirs(chunks[0]),
            asset_dirs: to_dirs(chunks[1]),
        })
    }

    /// The source set's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared manifest file, if any.
    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    /// Resource directories in declaration order.
    pub fn resource_dirs(&self) -> &[PathBuf] {
        &self.resource_dirs
    }

    /// Asset directories in declaration order.
    pub fn asset_dirs(&self) -> &[PathBuf] {
        &self.asset_dirs
    }
}
