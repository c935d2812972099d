//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# promlinter configuration

# Report metric call sites that cannot be analyzed (wrong argument
# counts, names computed at run time) instead of skipping them.
strict = false

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./pkg"

# Glob patterns to exclude, relative to the root
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]

# Skip _test.go files
skip_tests = false

# Check configurations, keyed by name or code.
# Run `promlinter list-checks` for the full list.

[checks.help]
enabled = true

# [checks.unit-abbreviations]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("promlinter.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created promlinter.toml");
    println!("\nNext steps:");
    println!("  1. Edit promlinter.toml to configure checks");
    println!("  2. Run: promlinter lint");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promlinter::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(!config.strict);
        assert!(!config.analyzer.skip_tests);
        assert!(config.is_check_enabled("help"));
        assert!(config.disabled_checks().is_empty());
        assert_eq!(config.analyzer.exclude.len(), 2);
    }
}
