//! Core types for pdfbatch.
//!
//! This crate provides the data structures shared by the rest of the
//! pdfbatch workspace: the run configuration, the error type, and the
//! batch partitioning that turns a flat list of discovered paths into
//! numbered groups.

mod batch;
mod config;
mod error;

pub use batch::{
    Batch, MANIFEST_EXTENSION, MANIFEST_PREFIX, batch_count, manifest_file_name, partition,
};
pub use config::{BatchConfig, BatchConfigBuilder, BatchConfigBuilderError, DEFAULT_EXTENSION};
pub use error::BatchError;
