//! Counters collected while walking the source tree.

/// Summary of a discovery walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Directories visited, including the source root.
    pub dirs_visited: u64,
    /// Regular files seen, matching or not.
    pub files_seen: u64,
    /// Files whose name matched a configured extension.
    pub files_matched: u64,
    /// Symlinks that were broken or did not resolve to a regular file.
    pub links_skipped: u64,
    /// FIFOs, sockets, and device nodes.
    pub special_skipped: u64,
}

impl DiscoveryStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_dir(&mut self) {
        self.dirs_visited += 1;
    }

    pub(crate) fn record_file(&mut self, matched: bool) {
        self.files_seen += 1;
        if matched {
            self.files_matched += 1;
        }
    }

    pub(crate) fn record_skipped_link(&mut self) {
        self.links_skipped += 1;
    }

    pub(crate) fn record_skipped_special(&mut self) {
        self.special_skipped += 1;
    }

    /// Files seen that did not match any extension.
    pub fn files_unmatched(&self) -> u64 {
        self.files_seen - self.files_matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut stats = DiscoveryStats::new();
        stats.record_dir();
        stats.record_file(true);
        stats.record_file(false);
        stats.record_file(true);
        stats.record_skipped_link();
        stats.record_skipped_special();

        assert_eq!(stats.dirs_visited, 1);
        assert_eq!(stats.files_seen, 3);
        assert_eq!(stats.files_matched, 2);
        assert_eq!(stats.files_unmatched(), 1);
        assert_eq!(stats.links_skipped, 1);
        assert_eq!(stats.special_skipped, 1);
    }
}
