//! Manifest-merge engine interface.
//!
//! The orchestration decides *which* manifest is the base, *which* are
//! overlays, and *where* the result lands; the engine owns the XML-level
//! merge rules. Computing the merge and writing a variant of the result
//! are separate, explicit steps.

use std::path::Path;

use anyhow::Result;

use crate::engine::EngineError;

/// Manifest merge semantics selector.
///
/// Changes only the engine's internal validation and defaulting rules,
/// never the orchestration's control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeType {
    /// Merging for an application (binary) target
    Application,
    /// Merging for a library target
    Library,
}

/// Policy features passed to the manifest engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestFeatures {
    /// Pass `${placeholder}` build variables through verbatim instead of
    /// substituting them; a later build stage resolves them.
    pub no_placeholder_replacement: bool,

    /// Fully qualify class names left unqualified in manifest elements.
    pub extract_fqcns: bool,
}

impl ManifestFeatures {
    /// The fixed feature set used for variant source-set merging: keep
    /// placeholders, qualify class names.
    pub fn variant_merge() -> Self {
        ManifestFeatures {
            no_placeholder_replacement: true,
            extract_fqcns: true,
        }
    }
}

/// Which rendition of a merge result to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// The plain merged manifest
    Merged,
    /// The annotated blame variant, attributing each element to its origin
    Blame,
}

/// A successfully computed manifest merge, not yet written anywhere.
pub trait ManifestReport {
    /// Write the requested rendition of the merge result to `target`.
    fn write(&self, kind: ManifestKind, target: &Path) -> Result<()>;
}

/// Capability interface for XML manifest merging.
pub trait ManifestEngine {
    /// Merge `overlays` (lower precedence, in order) into `base`.
    ///
    /// Returns a report that can materialize the result, or an
    /// [`EngineError`]: `Report` when the engine diagnosed a semantic merge
    /// failure, `Failure` when the engine itself broke.
    fn merge(
        &self,
        base: &Path,
        overlays: &[&Path],
        merge_type: MergeType,
        features: ManifestFeatures,
    ) -> Result<Box<dyn ManifestReport>, EngineError>;
}
