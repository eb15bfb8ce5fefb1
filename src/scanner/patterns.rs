use anyhow::{Context, Result};
use regex::Regex;

/// One rule in the fixed detection list
#[derive(Debug, Clone)]
pub struct SecretPattern {
    pub name: String,
    pub regex: Regex,
    pub description: String,
}

/// The fixed, ordered secret detection rule set
///
/// Rule order is part of the output contract: within a file, findings are
/// reported in list order.
#[derive(Debug, Clone)]
pub struct SecretPatterns {
    pub patterns: Vec<SecretPattern>,
}

impl SecretPattern {
    /// Compile a single detection rule
    pub fn new(name: &str, pattern: &str, description: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid regex pattern for {}: {}", name, pattern))?;

        Ok(Self {
            name: name.to_string(),
            regex,
            description: description.to_string(),
        })
    }
}

impl SecretPatterns {
    /// Compile the built-in rule set
    pub fn builtin() -> Result<Self> {
        let patterns = vec![
            SecretPattern::new(
                "AWS Access Key ID",
                r"AKIA[0-9A-Z]{16}",
                "Amazon Web Services access key identifiers",
            )?,
            // Greedy value capture: on a line with several quoted strings
            // after the `=`, the match runs to the last quote. Only
            // existence is reported either way.
            SecretPattern::new(
                "Hardcoded Password",
                r#"(?i)password\s*=\s*['"].+['"]"#,
                "Password assignments with a quoted, non-empty value",
            )?,
        ];

        tracing::debug!("Compiled {} built-in patterns", patterns.len());

        Ok(SecretPatterns { patterns })
    }

    /// Number of rules in the set
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
