//! File-level overlay implementation of the resource engine.
//!
//! Merges resource and asset trees at file granularity: every input file is
//! keyed by its path relative to its declaring directory, and collisions
//! resolve by layer then by record precedence. Value-level resource merging
//! (combining entries inside one `values.xml`) is an engine concern this
//! implementation does not attempt; a colliding file is replaced whole.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::engine::resource::{
    DependencyRecord, ResourceEngine, ResourceMergeOptions, TargetLayout, UnwrittenMerge,
};
use crate::engine::EngineError;
use crate::util::fs::{copy_file, ensure_dir};

/// Merge layer, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Transitive,
    Direct,
    Primary,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Transitive => write!(f, "transitive"),
            Layer::Direct => write!(f, "direct"),
            Layer::Primary => write!(f, "primary"),
        }
    }
}

/// Where a planned output file came from.
#[derive(Debug, Clone)]
struct FileOrigin {
    layer: Layer,
    rank: usize,
    source: PathBuf,
}

impl fmt::Display for FileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} record #{} ({})",
            self.layer,
            self.rank,
            self.source.display()
        )
    }
}

/// Default file-overlay resource engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayEngine;

impl OverlayEngine {
    pub fn new() -> Self {
        OverlayEngine
    }
}

impl ResourceEngine for OverlayEngine {
    fn merge(
        &self,
        transitive: &[DependencyRecord],
        direct: &[DependencyRecord],
        primary: &[DependencyRecord],
        options: &ResourceMergeOptions,
    ) -> Result<Box<dyn UnwrittenMerge>, EngineError> {
        let mut plan = OverlayPlan::default();

        for (layer, records) in [
            (Layer::Transitive, transitive),
            (Layer::Direct, direct),
            (Layer::Primary, primary),
        ] {
            plan.apply_layer(layer, records, options)?;
        }

        plan.manifest = primary.first().map(|record| record.manifest.clone());

        Ok(Box::new(plan))
    }
}

/// Planned output tree: relative destination path to chosen source file.
#[derive(Debug, Default)]
struct OverlayPlan {
    resources: BTreeMap<PathBuf, FileOrigin>,
    assets: BTreeMap<PathBuf, FileOrigin>,
    manifest: Option<PathBuf>,
}

impl OverlayPlan {
    /// Fold one layer's records into the plan.
    ///
    /// Records arrive highest precedence first, so they are applied in
    /// reverse: a later (more specific) insertion replaces an earlier one,
    /// leaving rank 0 the final owner of every contested path.
    fn apply_layer(
        &mut self,
        layer: Layer,
        records: &[DependencyRecord],
        options: &ResourceMergeOptions,
    ) -> Result<(), EngineError> {
        for (rank, record) in records.iter().enumerate().rev() {
            for dir in &record.resource_dirs {
                Self::apply_dir(&mut self.resources, layer, rank, dir, options)?;
            }
            for dir in &record.asset_dirs {
                Self::apply_dir(&mut self.assets, layer, rank, dir, options)?;
            }
        }
        Ok(())
    }

    fn apply_dir(
        planned: &mut BTreeMap<PathBuf, FileOrigin>,
        layer: Layer,
        rank: usize,
        dir: &Path,
        options: &ResourceMergeOptions,
    ) -> Result<(), EngineError> {
        if !dir.is_dir() {
            // Build rules routinely declare directories that a variant
            // never populates.
            tracing::debug!("skipping missing input directory {}", dir.display());
            return Ok(());
        }

        for entry in WalkDir::new(dir) {
            let entry = entry
                .with_context(|| format!("failed to walk input directory: {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(dir)
                .context("walked entry escaped its root")?
                .to_path_buf();
            let incoming = FileOrigin {
                layer,
                rank,
                source: entry.path().to_path_buf(),
            };

            if let Some(existing) = planned.get(&relative) {
                Self::check_conflict(&relative, existing, &incoming, options)?;
                tracing::debug!(
                    "{} overrides {} for {}",
                    incoming,
                    existing,
                    relative.display()
                );
            }
            planned.insert(relative, incoming);
        }

        Ok(())
    }

    fn check_conflict(
        relative: &Path,
        existing: &FileOrigin,
        incoming: &FileOrigin,
        options: &ResourceMergeOptions,
    ) -> Result<(), EngineError> {
        if options.throw_on_resource_conflict {
            return Err(EngineError::Report(format!(
                "resource conflict at {}: declared by {} and {}",
                relative.display(),
                existing,
                incoming
            )));
        }
        if existing.layer != incoming.layer && !options.primary_overrides_all {
            return Err(EngineError::Report(format!(
                "{} data for {} collides with {} data and overriding is disabled",
                incoming.layer,
                relative.display(),
                existing.layer
            )));
        }
        Ok(())
    }
}

impl UnwrittenMerge for OverlayPlan {
    fn write(&self, layout: &TargetLayout) -> Result<()> {
        ensure_dir(&layout.resource_dir)?;
        ensure_dir(&layout.asset_dir)?;

        let copies: Vec<(PathBuf, &FileOrigin)> = self
            .resources
            .iter()
            .map(|(relative, origin)| (layout.resource_dir.join(relative), origin))
            .chain(
                self.assets
                    .iter()
                    .map(|(relative, origin)| (layout.asset_dir.join(relative), origin)),
            )
            .collect();

        tracing::info!("writing {} merged resource files", copies.len());

        // Output paths are unique by construction (one plan entry per
        // relative path), so the parallel copies never contend.
        let results: Vec<Result<()>> = copies
            .par_iter()
            .map(|(dest, origin)| {
                if let Some(parent) = dest.parent() {
                    ensure_dir(parent)?;
                }
                copy_file(&origin.source, dest)
            })
            .collect();

        for result in results {
            result?;
        }

        if let Some(manifest) = &self.manifest {
            ensure_dir(&layout.manifest_dir)?;
            copy_file(manifest, &layout.manifest_dir.join("AndroidManifest.xml"))?;
        }

        Ok(())
    }
}
