//! Terminal output for AutoGuard
//!
//! Provides consistent, styled output for verbose-mode chrome. The report
//! lines that form the scan contract are printed unstyled to stdout by the
//! scan command itself, never through this handler.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a verbose step with emoji and styling
    pub fn verbose_step(&self, emoji: &str, message: &str) {
        if self.verbose {
            println!("{} {}", style(emoji).cyan(), style(message).dim());
        }
    }

    /// Print a verbose summary with styling
    pub fn verbose_summary(&self, icon: &str, message: &str, count: usize) {
        if self.verbose {
            println!(
                "{} {} {}",
                style(icon).cyan(),
                style(message).dim(),
                style(format!("({})", count)).yellow().bold()
            );
        }
    }
}
