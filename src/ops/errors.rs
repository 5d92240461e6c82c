//! Merge error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error during variant merging.
///
/// Every variant is fatal: a failure aborts the whole merge call. There is
/// no partial-success mode and no rollback of files already written before
/// the failure surfaced.
#[derive(Debug, Error)]
pub enum MergeError {
    /// No source set in the list declares a manifest.
    #[error("missing manifest declaration, check if at least one manifest is declared in any source set")]
    MissingManifest,

    /// The degenerate single-manifest copy refuses to overwrite.
    #[error("merged manifest target already exists: {path}\n\
             help: remove the stale file or choose a fresh target path")]
    TargetExists { path: PathBuf },

    /// A merge engine reported a semantic failure. The engine's diagnostic
    /// is preserved verbatim.
    #[error("merge engine reported a failure:\n{report}")]
    EngineReport { report: String },

    /// A merge engine failed at the infrastructure level, before it could
    /// produce a report.
    #[error("merge engine invocation failed")]
    Engine(#[source] anyhow::Error),

    /// A source-set spec string did not have the `resources:assets:manifest`
    /// shape.
    #[error("invalid source set spec `{spec}`, should be `resources:assets:manifest`")]
    InvalidSourceSetSpec { spec: String },

    /// A filesystem read, copy, or write failed. Never retried.
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}
