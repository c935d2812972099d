//! Locating and loading `promlinter.toml`.
//!
//! Lookup order:
//!
//! 1. `--config` flag (or `PROMLINTER_CONFIG`)
//! 2. `{project}/promlinter.toml`, then `{project}/.promlinter.toml`
//! 3. `$PROMLINTER_CONFIG_DIR/config.toml`, else `~/.promlinter/config.toml`
//! 4. built-in defaults

use anyhow::{Context, Result};
use promlinter::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["promlinter.toml", ".promlinter.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";
const GLOBAL_DIR_ENV: &str = "PROMLINTER_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the analyzed code.
    Project(PathBuf),
    /// Found in the user's global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Config file path, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration. [`ConfigSource::Default`] yields
    /// [`Config::default`].
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Finds the config for a project directory.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    find(project_dir, global_config_dir().as_deref())
}

/// Searches the project directory, then the global directory.
fn find(project_dir: &Path, global_dir: Option<&Path>) -> ConfigSource {
    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(path) = project {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Global config directory: `$PROMLINTER_CONFIG_DIR`, else
/// `~/.promlinter`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(GLOBAL_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".promlinter")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("promlinter.toml"), "").unwrap();

        let source = resolve(project.path(), Some(Path::new("/nonexistent.toml")));
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
        assert!(source.load().is_err());
    }

    #[test]
    fn project_names_in_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".promlinter.toml"), "").unwrap();
        assert_eq!(
            find(project.path(), None),
            ConfigSource::Project(project.path().join(".promlinter.toml"))
        );

        fs::write(project.path().join("promlinter.toml"), "").unwrap();
        assert_eq!(
            find(project.path(), None),
            ConfigSource::Project(project.path().join("promlinter.toml"))
        );
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("promlinter.toml")).unwrap();
        assert_eq!(find(project.path(), None), ConfigSource::Default);
    }

    #[test]
    fn global_is_a_fallback() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        assert_eq!(find(project.path(), Some(global.path())), ConfigSource::Default);

        fs::write(global.path().join("config.toml"), "strict = true\n").unwrap();
        let source = find(project.path(), Some(global.path()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));
        assert!(source.load().unwrap().strict);

        fs::write(project.path().join("promlinter.toml"), "").unwrap();
        assert!(matches!(
            find(project.path(), Some(global.path())),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn load_reads_checks() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("promlinter.toml"),
            "[checks.help]\nenabled = false\n",
        )
        .unwrap();

        let config = find(project.path(), None).load().unwrap();
        assert_eq!(config.disabled_checks(), vec!["help"]);
    }

    #[test]
    fn default_loads_defaults() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(!config.strict);
        assert!(ConfigSource::Default.path().is_none());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("promlinter.toml"), "strict = [").unwrap();

        let err = find(project.path(), None).load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }
}
