//! Fake merge engines for Stratum unit tests.
//!
//! Both fakes record every call they receive so tests can assert on the
//! exact base/overlay split and record order the orchestration produced,
//! independent of any real merge algorithm.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};

use crate::engine::{
    DependencyRecord, EngineError, ManifestEngine, ManifestFeatures, ManifestKind, ManifestReport,
    MergeType, ResourceEngine, ResourceMergeOptions, TargetLayout, UnwrittenMerge,
};

/// One recorded call to [`FakeManifestEngine::merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestCall {
    pub base: PathBuf,
    pub overlays: Vec<PathBuf>,
    pub merge_type: MergeType,
    pub features: ManifestFeatures,
}

enum ManifestOutcome {
    Succeed { merged: String },
    Report { diagnostic: String },
    Fail { message: String },
}

/// Recording fake for the manifest engine.
pub struct FakeManifestEngine {
    calls: Mutex<Vec<ManifestCall>>,
    outcome: ManifestOutcome,
}

impl FakeManifestEngine {
    /// Every merge succeeds and the report writes `merged` verbatim.
    pub fn succeeding(merged: &str) -> Self {
        FakeManifestEngine {
            calls: Mutex::new(Vec::new()),
            outcome: ManifestOutcome::Succeed {
                merged: merged.to_string(),
            },
        }
    }

    /// Every merge fails semantically with `diagnostic`.
    pub fn reporting(diagnostic: &str) -> Self {
        FakeManifestEngine {
            calls: Mutex::new(Vec::new()),
            outcome: ManifestOutcome::Report {
                diagnostic: diagnostic.to_string(),
            },
        }
    }

    /// Every merge fails at the infrastructure level with `message`.
    pub fn failing(message: &str) -> Self {
        FakeManifestEngine {
            calls: Mutex::new(Vec::new()),
            outcome: ManifestOutcome::Fail {
                message: message.to_string(),
            },
        }
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> Vec<ManifestCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ManifestEngine for FakeManifestEngine {
    fn merge(
        &self,
        base: &Path,
        overlays: &[&Path],
        merge_type: MergeType,
        features: ManifestFeatures,
    ) -> Result<Box<dyn ManifestReport>, EngineError> {
        self.calls.lock().unwrap().push(ManifestCall {
            base: base.to_path_buf(),
            overlays: overlays.iter().map(|p| p.to_path_buf()).collect(),
            merge_type,
            features,
        });

        match &self.outcome {
            ManifestOutcome::Succeed { merged } => Ok(Box::new(FakeReport {
                merged: merged.clone(),
            })),
            ManifestOutcome::Report { diagnostic } => {
                Err(EngineError::Report(diagnostic.clone()))
            }
            ManifestOutcome::Fail { message } => {
                Err(EngineError::Failure(anyhow!("{message}")))
            }
        }
    }
}

struct FakeReport {
    merged: String,
}

impl ManifestReport for FakeReport {
    fn write(&self, kind: ManifestKind, target: &Path) -> Result<()> {
        let content = match kind {
            ManifestKind::Merged => self.merged.clone(),
            ManifestKind::Blame => format!("<!-- blame -->\n{}", self.merged),
        };
        fs::write(target, content)?;
        Ok(())
    }
}

/// One recorded call to [`FakeResourceEngine::merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCall {
    pub transitive: Vec<DependencyRecord>,
    pub direct: Vec<DependencyRecord>,
    pub primary: Vec<DependencyRecord>,
    pub options: ResourceMergeOptions,
}

/// Recording fake for the resource engine. Writes nothing to disk.
#[derive(Default)]
pub struct FakeResourceEngine {
    calls: Mutex<Vec<ResourceCall>>,
    writes: Arc<Mutex<Vec<TargetLayout>>>,
    write_failure: Option<String>,
}

impl FakeResourceEngine {
    pub fn new() -> Self {
        FakeResourceEngine::default()
    }

    /// Every write fails with `message` after the merge itself succeeded.
    pub fn failing_write(message: &str) -> Self {
        FakeResourceEngine {
            write_failure: Some(message.to_string()),
            ..FakeResourceEngine::default()
        }
    }

    /// All merge calls recorded so far.
    pub fn calls(&self) -> Vec<ResourceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// All layouts written so far.
    pub fn writes(&self) -> Vec<TargetLayout> {
        self.writes.lock().unwrap().clone()
    }
}

impl ResourceEngine for FakeResourceEngine {
    fn merge(
        &self,
        transitive: &[DependencyRecord],
        direct: &[DependencyRecord],
        primary: &[DependencyRecord],
        options: &ResourceMergeOptions,
    ) -> Result<Box<dyn UnwrittenMerge>, EngineError> {
        self.calls.lock().unwrap().push(ResourceCall {
            transitive: transitive.to_vec(),
            direct: direct.to_vec(),
            primary: primary.to_vec(),
            options: *options,
        });

        Ok(Box::new(FakeUnwritten {
            writes: Arc::clone(&self.writes),
            failure: self.write_failure.clone(),
        }))
    }
}

struct FakeUnwritten {
    writes: Arc<Mutex<Vec<TargetLayout>>>,
    failure: Option<String>,
}

impl UnwrittenMerge for FakeUnwritten {
    fn write(&self, layout: &TargetLayout) -> Result<()> {
        if let Some(message) = &self.failure {
            bail!("{message}");
        }
        self.writes.lock().unwrap().push(layout.clone());
        Ok(())
    }
}
