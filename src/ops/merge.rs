//! Top-level merge driver.
//!
//! Resolves precedence once, then sequences the two phases: manifests
//! first, resources second. The resource phase consumes the merged
//! manifest's path as a fallback manifest reference and only runs when the
//! caller asked for a resource output directory at all.

use std::path::{Path, PathBuf};

use crate::core::precedence::resolve_precedence;
use crate::core::source_set::SourceSet;
use crate::engine::{ManifestEngine, MergeType, ResourceEngine, TargetLayout};
use crate::ops::errors::MergeError;
use crate::ops::merge_manifest::merge_manifests;
use crate::ops::merge_resources::merge_resources;

/// One merge invocation's inputs.
#[derive(Debug, Clone)]
pub struct MergeRequest<'a> {
    /// Application or library merge semantics
    pub merge_type: MergeType,

    /// Caller-declared source sets, low priority first
    pub source_sets: &'a [SourceSet],

    /// Resource/asset output root; `None` skips resource merging entirely
    pub output_dir: Option<&'a Path>,

    /// Where the merged manifest is written; always produced
    pub merged_manifest: &'a Path,
}

/// Paths produced by a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedVariant {
    /// The merged manifest file
    pub merged_manifest: PathBuf,

    /// The written resource layout, when resources were merged
    pub resource_layout: Option<TargetLayout>,
}

/// Merge the request's source sets into a single manifest and, when an
/// output directory is given, a single resource/asset tree.
///
/// Precedence is resolved exactly once and shared by both phases. Any
/// failure aborts the call; resources are never merged after a manifest
/// failure, and files already written stay where they are.
pub fn merge(
    request: &MergeRequest<'_>,
    manifest_engine: &dyn ManifestEngine,
    resource_engine: &dyn ResourceEngine,
) -> Result<MergedVariant, MergeError> {
    let resolved = resolve_precedence(request.source_sets);
    tracing::debug!(
        "resolved {} source sets, merging {} manifest first",
        resolved.len(),
        match request.merge_type {
            MergeType::Application => "application",
            MergeType::Library => "library",
        }
    );

    merge_manifests(
        manifest_engine,
        &resolved,
        request.merge_type,
        request.merged_manifest,
    )?;

    let resource_layout = match request.output_dir {
        Some(output_dir) => Some(merge_resources(
            resource_engine,
            &resolved,
            request.merged_manifest,
            output_dir,
        )?),
        None => None,
    };

    Ok(MergedVariant {
        merged_manifest: request.merged_manifest.to_path_buf(),
        resource_layout,
    })
}
