use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

use super::patterns::SecretPatterns;
use super::types::{ScanResult, ScanStats, ScannerConfig, SecretMatch};

/// Main scanner struct - handles secret detection across files and directories
pub struct Scanner {
    patterns: SecretPatterns,
    config: ScannerConfig,
}

impl Scanner {
    /// Create a scanner with an explicit rule set and configuration
    pub fn new(patterns: SecretPatterns, config: ScannerConfig) -> Self {
        Self { patterns, config }
    }

    /// Create a scanner with the built-in rule set and default configuration
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(SecretPatterns::builtin()?, ScannerConfig::default()))
    }

    /// Scan a directory tree for secrets
    ///
    /// Walks every subdirectory under `root` and matches each eligible file
    /// against the full rule set, one file at a time. The scan aborts on the
    /// first directory that cannot be listed or file that cannot be read;
    /// there is no per-file error isolation.
    pub fn scan_directory(&self, root: &Path) -> Result<ScanResult> {
        let start_time = Instant::now();
        let mut matches = Vec::new();
        let mut stats = ScanStats::default();

        for entry in WalkDir::new(root).follow_links(self.config.follow_symlinks) {
            let entry = entry.with_context(|| {
                format!("Failed to walk directory tree under {}", root.display())
            })?;

            if !entry.path().is_file() {
                continue;
            }

            if !self.is_candidate(entry.path()) {
                continue;
            }

            matches.extend(self.scan_file(entry.path())?);
            stats.files_scanned += 1;
        }

        stats.total_matches = matches.len();
        stats.scan_duration_ms = start_time.elapsed().as_millis() as u64;

        tracing::debug!(
            "Scanned {} files, {} matches in {}ms",
            stats.files_scanned,
            stats.total_matches,
            stats.scan_duration_ms
        );

        Ok(ScanResult { matches, stats })
    }

    /// Scan a single file against every rule in list order
    ///
    /// The whole content is read into memory and searched unanchored, so a
    /// match spanning a line boundary still counts. Each rule records at
    /// most one match per file; only existence is tested.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<SecretMatch>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut matches = Vec::new();
        for pattern in &self.patterns.patterns {
            if pattern.regex.is_match(&content) {
                tracing::debug!("{} matched in {}", pattern.name, path.display());
                matches.push(SecretMatch {
                    file_name: file_name.clone(),
                    secret_type: pattern.name.clone(),
                    pattern: pattern.regex.as_str().to_string(),
                });
            }
        }

        Ok(matches)
    }

    /// Check whether a path is eligible for scanning
    ///
    /// The file name is compared case-sensitively against the configured
    /// suffix list. A dotfile like `.env` qualifies (its suffix after the
    /// last dot is `env`); a bare name like `Makefile` does not.
    fn is_candidate(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
            return false;
        };

        self.config
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}
