//! Scan command implementation
//!
//! Walks the current working directory, prints the findings report, and
//! sets the process exit code: 0 for a clean tree, 1 when any potential
//! secret is detected.

use crate::cli::Output;
use crate::scanner::Scanner;
use anyhow::Result;
use std::path::Path;

/// Run the secret scan over the current working directory
pub async fn execute(output: &Output) -> Result<()> {
    let scanner = Scanner::with_defaults()?;

    output.verbose_step("🔍", "Scanning current directory for secrets");

    let result = scanner.scan_directory(Path::new("."))?;

    output.verbose_summary("📊", "Files scanned", result.stats.files_scanned);
    output.verbose(&format!(
        "Scan completed in {}ms",
        result.stats.scan_duration_ms
    ));

    if result.is_clean() {
        println!("✅ No secrets found. Safe to deploy.");
        return Ok(());
    }

    println!("🚨 AutoGuard detected potential secrets:");
    for finding in &result.matches {
        println!("{} → {}", finding.file_name, finding.pattern);
    }

    // Exit with error code since secrets were found
    std::process::exit(1);
}
