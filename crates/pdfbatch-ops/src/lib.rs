//! Manifest writing and the batch pipeline for pdfbatch.
//!
//! [`Batcher`] composes discovery, partitioning, and manifest writing into
//! one run. [`write_manifests`] is exposed on its own for callers that
//! already hold their batches.

mod batcher;
mod manifest;
mod report;

pub use batcher::{Batcher, run};
pub use manifest::{write_manifest, write_manifests};
pub use report::{BatchReport, ManifestEntry};

pub use pdfbatch_core::{Batch, BatchConfig, BatchError};
