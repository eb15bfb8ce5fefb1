//! # AutoGuard - Pre-Deployment Secret Scanning
//!
//! AutoGuard walks a directory tree, checks text files against a fixed set
//! of secret-detection patterns, and produces a binary pass/fail signal:
//!
//! - **Fixed pattern list**: AWS access key identifiers and hardcoded
//!   password assignments
//! - **Extension filtering**: only `.py`, `.js`, `.env`, `.yml`, and `.txt`
//!   files are scanned
//! - **Deterministic reporting**: findings print in discovery order, then
//!   the process exits non-zero
//!
//! ## Quick Start
//!
//! ```bash
//! # Install autoguard
//! cargo install autoguard
//!
//! # Scan the current directory
//! autoguard
//! ```
//!
//! ## Library Usage
//!
//! AutoGuard can also be used as a library for building custom checks:
//!
//! ```rust,no_run
//! use autoguard::scanner::Scanner;
//! use std::path::Path;
//!
//! let scanner = Scanner::with_defaults()?;
//! let result = scanner.scan_directory(Path::new("."))?;
//!
//! for finding in &result.matches {
//!     println!("{} → {}", finding.file_name, finding.pattern);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod scanner;

pub use cli::{Cli, Output};
pub use scanner::{ScanResult, Scanner, SecretMatch};
