//! Resource merge orchestration.
//!
//! Converts the resolved source sets into dependency records and hands them
//! to the resource engine as the sole primary layer: the transitive and
//! direct layers stay empty, the primary layer unconditionally overrides,
//! and conflicts inside it resolve by precedence instead of failing.

use std::path::Path;

use crate::core::precedence::Ranked;
use crate::engine::{
    DependencyRecord, EngineError, ResourceEngine, ResourceMergeOptions, TargetLayout,
};
use crate::ops::errors::MergeError;

/// Merge the resolved source sets' resources and assets under `output_dir`.
///
/// `merged_manifest` must already exist: source sets that declare no
/// manifest of their own carry it as their manifest reference, which is why
/// the manifest phase runs first.
pub fn merge_resources(
    engine: &dyn ResourceEngine,
    resolved: &[Ranked<'_>],
    merged_manifest: &Path,
    output_dir: &Path,
) -> Result<TargetLayout, MergeError> {
    let records: Vec<DependencyRecord> = resolved
        .iter()
        .map(|ranked| DependencyRecord {
            resource_dirs: ranked.source_set.resource_dirs().to_vec(),
            asset_dirs: ranked.source_set.asset_dirs().to_vec(),
            manifest: ranked
                .source_set
                .manifest()
                .unwrap_or(merged_manifest)
                .to_path_buf(),
        })
        .collect();

    tracing::info!(
        "merging resources from {} source sets into {}",
        records.len(),
        output_dir.display()
    );

    let options = ResourceMergeOptions {
        primary_overrides_all: true,
        throw_on_resource_conflict: false,
    };
    let unwritten = engine
        .merge(&[], &[], &records, &options)
        .map_err(|err| match err {
            EngineError::Report(report) => MergeError::EngineReport { report },
            EngineError::Failure(source) => MergeError::Engine(source),
        })?;

    let layout = TargetLayout::under(output_dir);
    unwritten.write(&layout)?;
    Ok(layout)
}
