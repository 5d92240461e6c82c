//! Manifest merge orchestration.
//!
//! Picks the highest-precedence manifest as the merge base and feeds the
//! remainder as lower-precedence overlays to the manifest engine. With a
//! single manifest the merge degenerates to a plain file copy; with none it
//! is a configuration error.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::precedence::Ranked;
use crate::engine::{EngineError, ManifestEngine, ManifestFeatures, ManifestKind, MergeType};
use crate::ops::errors::MergeError;
use crate::util::fs::ensure_dir;

/// Merge the manifests of the resolved source sets into `target`.
///
/// `resolved` must be in precedence order (rank 0 first); source sets
/// without a manifest contribute nothing but keep their position in the
/// order.
pub fn merge_manifests(
    engine: &dyn ManifestEngine,
    resolved: &[Ranked<'_>],
    merge_type: MergeType,
    target: &Path,
) -> Result<(), MergeError> {
    // Collection preserves resolved order; precedence is positional.
    let manifests: Vec<&Path> = resolved
        .iter()
        .filter_map(|ranked| ranked.source_set.manifest())
        .collect();

    match manifests.split_first() {
        None => Err(MergeError::MissingManifest),

        Some((main, [])) => {
            // Degenerate merge: a byte-for-byte copy, never an overwrite.
            if target.exists() {
                return Err(MergeError::TargetExists {
                    path: target.to_path_buf(),
                });
            }
            if let Some(parent) = target.parent() {
                ensure_dir(parent)?;
            }
            fs::copy(main, target)
                .with_context(|| {
                    format!(
                        "failed to copy manifest {} to {}",
                        main.display(),
                        target.display()
                    )
                })
                .map_err(MergeError::Io)?;

            tracing::debug!("single manifest, copied {} verbatim", main.display());
            Ok(())
        }

        Some((main, overlays)) => {
            tracing::info!(
                "merging {} manifests, base {}",
                manifests.len(),
                main.display()
            );

            let report = engine
                .merge(main, overlays, merge_type, ManifestFeatures::variant_merge())
                .map_err(|err| match err {
                    EngineError::Report(report) => MergeError::EngineReport { report },
                    EngineError::Failure(source) => MergeError::Engine(source),
                })?;

            if let Some(parent) = target.parent() {
                ensure_dir(parent)?;
            }
            report.write(ManifestKind::Merged, target)?;
            Ok(())
        }
    }
}
