//! Manifest file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use pdfbatch_core::{Batch, BatchError};

use crate::report::ManifestEntry;

/// Write one batch to `output_dir/batch_{index}.txt`, replacing any
/// existing file.
///
/// Each path is written as raw bytes followed by `\n`. The file is flushed
/// and closed before returning.
pub fn write_manifest(batch: &Batch, output_dir: &Path) -> Result<ManifestEntry, BatchError> {
    let path = output_dir.join(batch.file_name());
    let file = File::create(&path).map_err(|e| BatchError::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    for entry in &batch.paths {
        writer
            .write_all(entry.as_os_str().as_encoded_bytes())
            .map_err(|e| BatchError::io(&path, e))?;
        writer.write_all(b"\n").map_err(|e| BatchError::io(&path, e))?;
    }
    writer.flush().map_err(|e| BatchError::io(&path, e))?;
    drop(writer);

    debug!(manifest = %path.display(), count = batch.len(), "wrote manifest");

    Ok(ManifestEntry {
        index: batch.index,
        path,
        count: batch.len(),
    })
}

/// Write every batch in order. Stops at the first failure; manifests
/// already written are left in place.
pub fn write_manifests(batches: &[Batch], output_dir: &Path) -> Result<Vec<ManifestEntry>, BatchError> {
    batches
        .iter()
        .map(|batch| write_manifest(batch, output_dir))
        .collect()
}
