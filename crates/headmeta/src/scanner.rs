//! The scan driver: discovery -> parse -> walk -> accumulate.
//!
//! Each file's traversal is a pure, read-only walk over the front-end's
//! in-memory tree producing an owned value, so files may be processed
//! sequentially or in parallel with identical results. Per-file failures
//! (unreadable, oversized, unparseable) are recorded in the report and do
//! not abort the batch; the caller decides what to do with them.

use crate::config::ScanConfig;
use crate::discovery::{discover_files, DiscoveredFile};
use crate::error::{Result, ScanError};
use crate::schema::HeaderMetadata;
use crate::walker::walk_header;
use headmeta_frontend_api::{Frontend, TranslationUnit};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Outcome of scanning one directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Relative path -> extracted metadata, ordered by path so that
    /// serializing the report is deterministic across runs
    pub files: BTreeMap<String, HeaderMetadata>,

    /// Files that could not be processed, with diagnostics. Never silently
    /// dropped: a partial result is always visible as a partial result.
    pub failures: Vec<(PathBuf, String)>,
}

impl ScanReport {
    /// Number of successfully processed files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of files that failed
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when every discovered file was processed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a front-end over a directory of headers.
pub struct Scanner<F: Frontend> {
    frontend: F,
    config: ScanConfig,
}

impl<F: Frontend> Scanner<F> {
    /// Create a scanner. Fails if the configuration is invalid.
    pub fn new(frontend: F, config: ScanConfig) -> Result<Self> {
        config.validate().map_err(ScanError::InvalidConfig)?;
        Ok(Self { frontend, config })
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Process one file: size check, parse, walk.
    fn process_file(&self, file: &DiscoveredFile) -> std::result::Result<HeaderMetadata, String> {
        let metadata = std::fs::metadata(&file.path).map_err(|e| e.to_string())?;
        if metadata.len() > self.config.max_file_size as u64 {
            return Err(format!(
                "exceeds maximum size of {} bytes (actual: {} bytes)",
                self.config.max_file_size,
                metadata.len()
            ));
        }

        let unit = self
            .frontend
            .parse_file(&file.path)
            .map_err(|e| e.to_string())?;

        let meta = walk_header(&unit.top_level(), &self.config);
        debug!(
            file = %file.relative,
            classes = meta.classes.len(),
            structs = meta.structs.len(),
            enums = meta.enums.len(),
            "Walked header"
        );
        Ok(meta)
    }

    /// Scan every non-excluded header under `root`.
    ///
    /// The report contains exactly one entry per discovered file that
    /// processed successfully, keyed by its root-relative path.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn scan_directory(&self, root: &Path) -> Result<ScanReport> {
        let start = Instant::now();
        let files = discover_files(root, &self.config)?;

        let mut report = ScanReport::default();

        if self.config.parallel {
            self.scan_parallel(&files, &mut report)?;
        } else {
            for file in &files {
                match self.process_file(file) {
                    Ok(meta) => {
                        report.files.insert(file.relative.clone(), meta);
                    }
                    Err(message) => {
                        warn!(file = %file.relative, error = %message, "Skipping file");
                        report.failures.push((file.path.clone(), message));
                    }
                }
            }
        }

        info!(
            files = report.file_count(),
            failures = report.failure_count(),
            time_ms = start.elapsed().as_millis(),
            "Scan completed"
        );
        Ok(report)
    }

    /// Parallel variant: every file writes to a distinct key, so results are
    /// computed independently and merged afterwards.
    fn scan_parallel(&self, files: &[DiscoveredFile], report: &mut ScanReport) -> Result<()> {
        use rayon::prelude::*;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(num_threads) = self.config.num_threads {
            builder = builder.num_threads(num_threads);
        }
        let pool = builder
            .build()
            .map_err(|e| ScanError::InvalidConfig(format!("Failed to create thread pool: {e}")))?;

        let results: Vec<(usize, std::result::Result<HeaderMetadata, String>)> = pool.install(|| {
            files
                .par_iter()
                .enumerate()
                .map(|(index, file)| (index, self.process_file(file)))
                .collect()
        });

        for (index, result) in results {
            let file = &files[index];
            match result {
                Ok(meta) => {
                    report.files.insert(file.relative.clone(), meta);
                }
                Err(message) => {
                    warn!(file = %file.relative, error = %message, "Skipping file");
                    report.failures.push((file.path.clone(), message));
                }
            }
        }

        // Merge order above follows discovery order, but make it explicit
        report.failures.sort();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = ScanReport::default();
        assert!(report.is_complete());

        report
            .files
            .insert("a.hpp".to_string(), HeaderMetadata::default());
        report
            .failures
            .push((PathBuf::from("b.hpp"), "bad".to_string()));

        assert_eq!(report.file_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.is_complete());
    }
}
