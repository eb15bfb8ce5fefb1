/// Represents a detected secret match in a file
///
/// One record is emitted per (file, rule) pair. Only existence is recorded,
/// so the file name and the rule's literal pattern string are all a report
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretMatch {
    /// Final path component of the file the rule matched in
    pub file_name: String,
    /// Name of the rule that matched
    pub secret_type: String,
    /// Literal source of the rule's regular expression
    pub pattern: String,
}

/// Statistics from a scanning operation
#[derive(Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub total_matches: usize,
    pub scan_duration_ms: u64,
}

/// Result of a scanning operation
#[derive(Debug)]
pub struct ScanResult {
    pub matches: Vec<SecretMatch>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// True when the scan produced no findings
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Configuration for the scanner
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Suffixes eligible for scanning, compared case-sensitively against
    /// the end of the file name (the part after the last dot)
    pub extensions: Vec<String>,
    /// Whether the walker descends into symlinked directories
    pub follow_symlinks: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".py".to_string(),
                ".js".to_string(),
                ".env".to_string(),
                ".yml".to_string(),
                ".txt".to_string(),
            ],
            follow_symlinks: false,
        }
    }
}
