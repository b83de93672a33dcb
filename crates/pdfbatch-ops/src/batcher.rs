//! The discover, partition, write pipeline.

use tracing::{info, warn};

use pdfbatch_core::{BatchConfig, BatchError, partition};
use pdfbatch_scan::FileScanner;

use crate::manifest::write_manifests;
use crate::report::BatchReport;

/// Runs one batching pass over a source tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Batcher {
    scanner: FileScanner,
}

impl Batcher {
    /// Create a new batcher.
    pub fn new() -> Self {
        Self {
            scanner: FileScanner::new(),
        }
    }

    /// Discover matching files, split them into batches, and write one
    /// manifest per batch.
    ///
    /// Finding nothing is not an error: the returned report is empty and
    /// no files are written. The output directory must already exist.
    pub fn run(&self, config: &BatchConfig) -> Result<BatchReport, BatchError> {
        config.validate()?;

        let discovery = self.scanner.discover(config)?;
        let total_files = discovery.len();

        if discovery.is_empty() {
            warn!(source = %config.source.display(), "no matching files found");
            return Ok(BatchReport::empty(
                &config.source,
                &config.output_dir,
                config.batch_size,
            ));
        }

        let batches = partition(discovery.into_paths(), config.batch_size)?;
        let manifests = write_manifests(&batches, &config.output_dir)?;

        info!(
            manifests = manifests.len(),
            files = total_files,
            output_dir = %config.output_dir.display(),
            "batching complete"
        );

        Ok(BatchReport {
            source: config.source.clone(),
            output_dir: config.output_dir.clone(),
            batch_size: config.batch_size,
            manifests,
            total_files,
        })
    }
}

/// Run a batching pass with a default [`Batcher`].
pub fn run(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    Batcher::new().run(config)
}
