//! Directory discovery engine for pdfbatch.
//!
//! This crate walks a source tree with jwalk and collects every regular
//! file whose name ends with one of the configured extensions.
//!
//! # Overview
//!
//! - **Serial traversal** on the calling thread, so the yielded order is
//!   stable across re-runs on an unchanged tree
//! - **Case-insensitive suffix matching** (`.pdf`, `.PDF`, `.Pdf`, ...)
//! - **Fail fast**: a missing source or an unreadable directory aborts
//!   the walk with a [`BatchError`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pdfbatch_scan::{BatchConfig, FileScanner};
//!
//! let config = BatchConfig::new("/path/to/pdfs", 100, "/path/to/manifests");
//! let discovery = FileScanner::new().discover(&config).unwrap();
//!
//! println!("Found {} files", discovery.len());
//! ```

mod scanner;
mod stats;

pub use scanner::{Discovery, FileScanner, discover};
pub use stats::DiscoveryStats;

// Re-export core types for convenience
pub use pdfbatch_core::{BatchConfig, BatchError};
