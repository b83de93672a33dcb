//! Batch run configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::BatchError;

/// Extension matched when none are configured.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Configuration for a single batching run.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BatchConfig {
    /// Root directory to scan.
    pub source: PathBuf,

    /// Maximum number of paths per manifest.
    pub batch_size: usize,

    /// Directory that receives the `batch_{i}.txt` manifests.
    pub output_dir: PathBuf,

    /// File name suffixes to collect, without the leading dot.
    /// Matched case-insensitively.
    #[builder(default = "default_extensions()")]
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Follow symbolic links to directories while walking.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Include hidden files and directories (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Visit each directory's entries in file-name order.
    #[builder(default = "false")]
    #[serde(default)]
    pub sort: bool,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

fn check_extensions(extensions: &[String]) -> Result<(), String> {
    if extensions.is_empty() {
        return Err("At least one extension is required".to_string());
    }
    if extensions.iter().any(|ext| normalize_extension(ext).is_empty()) {
        return Err("Extensions cannot be blank".to_string());
    }
    Ok(())
}

/// Lowercase an extension and strip any leading dots the caller supplied.
fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

impl BatchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.source {
            Some(ref source) if source.as_os_str().is_empty() => {
                return Err("Source path cannot be empty".to_string());
            }
            None => return Err("Source path is required".to_string()),
            _ => {}
        }
        match self.output_dir {
            Some(ref dir) if dir.as_os_str().is_empty() => {
                return Err("Output directory cannot be empty".to_string());
            }
            None => return Err("Output directory is required".to_string()),
            _ => {}
        }
        match self.batch_size {
            Some(0) => return Err("Batch size must be a positive integer".to_string()),
            None => return Err("Batch size is required".to_string()),
            _ => {}
        }
        if let Some(ref extensions) = self.extensions {
            check_extensions(extensions)?;
        }
        Ok(())
    }
}

impl BatchConfig {
    /// Create a new config builder.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::default()
    }

    /// Create a config with default options for the given paths.
    pub fn new(
        source: impl Into<PathBuf>,
        batch_size: usize,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            batch_size,
            output_dir: output_dir.into(),
            extensions: default_extensions(),
            follow_symlinks: false,
            include_hidden: true,
            sort: false,
        }
    }

    /// Check a config that did not go through the builder.
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.source.as_os_str().is_empty() {
            return Err(BatchError::invalid_config("Source path cannot be empty"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(BatchError::invalid_config("Output directory cannot be empty"));
        }
        if self.batch_size == 0 {
            return Err(BatchError::invalid_config(
                "Batch size must be a positive integer",
            ));
        }
        check_extensions(&self.extensions).map_err(BatchError::invalid_config)
    }

    /// Dotted, lowercased suffixes to match file names against.
    pub fn suffixes(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", normalize_extension(ext)))
            .collect()
    }

    /// Check if a file name ends with one of the configured extensions.
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.suffixes().iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check if hidden files should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = BatchConfig::builder()
            .source("/data/in")
            .batch_size(50usize)
            .output_dir("/data/out")
            .sort(true)
            .build()
            .unwrap();

        assert_eq!(config.source, PathBuf::from("/data/in"));
        assert_eq!(config.output_dir, PathBuf::from("/data/out"));
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.extensions, vec!["pdf".to_string()]);
        assert!(config.sort);
        assert!(config.include_hidden);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_builder_rejects_zero_batch_size() {
        let err = BatchConfig::builder()
            .source("/data/in")
            .batch_size(0usize)
            .output_dir("/data/out")
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_builder_requires_paths() {
        assert!(BatchConfig::builder().batch_size(1usize).output_dir("/out").build().is_err());
        assert!(BatchConfig::builder().batch_size(1usize).source("/in").build().is_err());
        assert!(
            BatchConfig::builder()
                .source("")
                .batch_size(1usize)
                .output_dir("/out")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_builder_rejects_blank_extensions() {
        let result = BatchConfig::builder()
            .source("/in")
            .batch_size(1usize)
            .output_dir("/out")
            .extensions(vec![".".to_string()])
            .build();
        assert!(result.is_err());

        let result = BatchConfig::builder()
            .source("/in")
            .batch_size(1usize)
            .output_dir("/out")
            .extensions(Vec::<String>::new())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_hand_built_config() {
        let mut config = BatchConfig::new("/in", 3, "/out");
        assert!(config.validate().is_ok());

        config.batch_size = 0;
        assert!(matches!(
            config.validate(),
            Err(BatchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let config = BatchConfig::new("/in", 1, "/out");

        assert!(config.matches_name("report.pdf"));
        assert!(config.matches_name("REPORT.PDF"));
        assert!(config.matches_name("Report.Pdf"));
        assert!(config.matches_name("archive.tar.pdf"));
        assert!(!config.matches_name("notes.txt"));
        assert!(!config.matches_name("draft.pdfx"));
        assert!(!config.matches_name("pdf"));
    }

    #[test]
    fn test_matches_name_custom_extensions() {
        let mut config = BatchConfig::new("/in", 1, "/out");
        config.extensions = vec![".EPUB".to_string(), "djvu".to_string()];

        assert_eq!(config.suffixes(), vec![".epub".to_string(), ".djvu".to_string()]);
        assert!(config.matches_name("book.epub"));
        assert!(config.matches_name("scan.DJVU"));
        assert!(!config.matches_name("paper.pdf"));
    }

    #[test]
    fn test_should_skip_hidden() {
        let mut config = BatchConfig::new("/in", 1, "/out");

        // By default, hidden files are included
        assert!(!config.should_skip_hidden(".cache"));

        config.include_hidden = false;
        assert!(config.should_skip_hidden(".cache"));
        assert!(!config.should_skip_hidden("docs"));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: BatchConfig = serde_json::from_str(
            r#"{"source": "/in", "batch_size": 4, "output_dir": "/out"}"#,
        )
        .unwrap();

        assert_eq!(config, BatchConfig::new("/in", 4, "/out"));
    }
}
