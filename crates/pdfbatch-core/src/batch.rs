//! Partitioning of discovered paths into numbered batches.

use std::path::PathBuf;

use crate::error::BatchError;

/// File name prefix shared by every manifest.
pub const MANIFEST_PREFIX: &str = "batch_";

/// File name extension shared by every manifest.
pub const MANIFEST_EXTENSION: &str = "txt";

/// A contiguous group of discovered paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// 1-based position of this batch in the run.
    pub index: usize,
    /// Paths in discovery order.
    pub paths: Vec<PathBuf>,
}

impl Batch {
    /// Number of paths in this batch.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the batch holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Name of the manifest file this batch is written to.
    pub fn file_name(&self) -> String {
        manifest_file_name(self.index)
    }
}

/// Manifest file name for a 1-based batch index, e.g. `batch_3.txt`.
pub fn manifest_file_name(index: usize) -> String {
    format!("{MANIFEST_PREFIX}{index}.{MANIFEST_EXTENSION}")
}

/// Number of batches needed to hold `total` paths.
pub fn batch_count(total: usize, batch_size: usize) -> Result<usize, BatchError> {
    if batch_size == 0 {
        return Err(BatchError::invalid_config(
            "Batch size must be a positive integer",
        ));
    }
    Ok(total.div_ceil(batch_size))
}

/// Split `paths` into contiguous batches of at most `batch_size` entries.
///
/// Every batch except possibly the last holds exactly `batch_size` paths.
/// An empty input yields no batches.
pub fn partition(paths: Vec<PathBuf>, batch_size: usize) -> Result<Vec<Batch>, BatchError> {
    let count = batch_count(paths.len(), batch_size)?;
    let mut batches = Vec::with_capacity(count);
    let mut remaining = paths.into_iter();

    for index in 1..=count {
        let chunk: Vec<PathBuf> = remaining.by_ref().take(batch_size).collect();
        batches.push(Batch {
            index,
            paths: chunk,
        });
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("/src/doc_{i}.pdf"))).collect()
    }

    #[test]
    fn test_partition_seven_by_three() {
        let batches = partition(paths(7), 3).unwrap();

        let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(
            batches.iter().map(|b| b.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_partition_exact_fit() {
        let batches = partition(paths(4), 4).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].paths, paths(4));
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(Vec::new(), 5).unwrap().is_empty());
    }

    #[test]
    fn test_partition_rejects_zero() {
        assert!(matches!(
            partition(paths(3), 0),
            Err(BatchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_partition_sizes_and_order() {
        for n in 0..40 {
            for size in 1..12 {
                let input = paths(n);
                let batches = partition(input.clone(), size).unwrap();

                assert_eq!(batches.len(), n.div_ceil(size));
                if let Some((last, rest)) = batches.split_last() {
                    assert!(rest.iter().all(|b| b.len() == size));
                    assert_eq!(last.len(), n - size * (batches.len() - 1));
                    assert!(!last.is_empty() && last.len() <= size);
                }

                let rejoined: Vec<PathBuf> =
                    batches.into_iter().flat_map(|b| b.paths).collect();
                assert_eq!(rejoined, input);
            }
        }
    }

    #[test]
    fn test_manifest_file_name() {
        assert_eq!(manifest_file_name(1), "batch_1.txt");
        assert_eq!(manifest_file_name(12), "batch_12.txt");
        let batch = Batch {
            index: 2,
            paths: Vec::new(),
        };
        assert_eq!(batch.file_name(), "batch_2.txt");
        assert!(batch.is_empty());
    }
}
