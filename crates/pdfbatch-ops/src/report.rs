//! Results of a batching run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A manifest written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based batch index.
    pub index: usize,
    /// Location of the manifest file.
    pub path: PathBuf,
    /// Number of paths listed in the manifest.
    pub count: usize,
}

/// Outcome of [`Batcher::run`](crate::Batcher::run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Directory that was scanned.
    pub source: PathBuf,
    /// Directory the manifests were written to.
    pub output_dir: PathBuf,
    /// Configured maximum paths per manifest.
    pub batch_size: usize,
    /// Written manifests, in batch order.
    pub manifests: Vec<ManifestEntry>,
    /// Total matching files across all manifests.
    pub total_files: usize,
}

impl BatchReport {
    /// A report for a run that found nothing and wrote nothing.
    pub fn empty(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, batch_size: usize) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            batch_size,
            manifests: Vec::new(),
            total_files: 0,
        }
    }

    /// Whether no manifests were written.
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Paths of the written manifests, in batch order.
    pub fn manifest_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.manifests.iter().map(|m| &m.path)
    }
}
