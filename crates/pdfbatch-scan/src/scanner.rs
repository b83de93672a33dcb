//! JWalk-based directory scanner.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info, trace};

use pdfbatch_core::{BatchConfig, BatchError};

use crate::stats::DiscoveryStats;

/// Files collected by a discovery walk, in traversal order.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Matching file paths, each joined onto the configured source path.
    pub paths: Vec<PathBuf>,
    /// Walk counters.
    pub stats: DiscoveryStats,
    /// Wall time spent walking.
    pub duration: Duration,
}

impl Discovery {
    /// Number of matching files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Take ownership of the discovered paths.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

/// Sequential scanner using jwalk for traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileScanner;

impl FileScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Walk `config.source` and collect every matching regular file.
    pub fn discover(&self, config: &BatchConfig) -> Result<Discovery, BatchError> {
        let start = Instant::now();
        let root = config.source.as_path();

        let metadata = std::fs::metadata(root).map_err(|e| BatchError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(BatchError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let suffixes = config.suffixes();
        let hidden_filter = config.clone();

        // Hidden entries are filtered here rather than with jwalk's
        // skip_hidden so the rule lives on the config.
        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(config.follow_symlinks)
            .sort(config.sort)
            .min_depth(0)
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|child| match child {
                    Ok(entry) => {
                        !hidden_filter.should_skip_hidden(&entry.file_name().to_string_lossy())
                    }
                    Err(_) => true,
                });
            });

        let mut paths = Vec::new();
        let mut stats = DiscoveryStats::new();

        for entry_result in walker {
            let mut entry = entry_result.map_err(|err| walk_error(&err, root))?;

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // jwalk reports an unreadable directory on the entry itself
                if let Some(err) = entry.read_children_error.take() {
                    return Err(walk_error(&err, &entry.path()));
                }
                stats.record_dir();
                trace!(path = %entry.path().display(), "visiting directory");
                continue;
            }

            let path = entry.path();
            if file_type.is_symlink() {
                if !resolves_to_file(&path) {
                    stats.record_skipped_link();
                    debug!(path = %path.display(), "skipping link that is not a regular file");
                    continue;
                }
            } else if !file_type.is_file() {
                stats.record_skipped_special();
                debug!(path = %path.display(), "skipping special file");
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_lowercase();
            let matched = suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()));
            stats.record_file(matched);

            if matched {
                trace!(path = %path.display(), "matched");
                paths.push(path);
            }
        }

        let duration = start.elapsed();
        info!(
            source = %root.display(),
            matched = stats.files_matched,
            files = stats.files_seen,
            unmatched = stats.files_unmatched(),
            dirs = stats.dirs_visited,
            elapsed_ms = duration.as_millis() as u64,
            "discovery finished"
        );

        Ok(Discovery {
            paths,
            stats,
            duration,
        })
    }
}

/// Walk `config.source` with a default scanner.
pub fn discover(config: &BatchConfig) -> Result<Discovery, BatchError> {
    FileScanner::new().discover(config)
}

/// Map a walker error onto [`BatchError`], keeping the I/O kind when there
/// is one.
fn walk_error(err: &jwalk::Error, fallback: &Path) -> BatchError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| fallback.to_path_buf());
    match err.io_error().map(std::io::Error::kind) {
        Some(std::io::ErrorKind::PermissionDenied) => BatchError::PermissionDenied { path },
        Some(std::io::ErrorKind::NotFound) => BatchError::NotFound { path },
        _ => BatchError::Walk {
            path,
            message: err.to_string(),
        },
    }
}

/// Whether a symlink points, possibly through other links, at a regular file.
/// Links to directories are not followed here and count as non-files.
fn resolves_to_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
