//! Engine configuration from environment variables.
//!
//! # Environment Variables
//!
//! - `LAUNDRY_LOG` - tracing filter directive (default: `laundry_engine=info`)
//! - `LAUNDRY_CATALOGUE` - path to a ruleset catalogue JSON file (optional)
//! - `LAUNDRY_LOCALE` - path to a flat JSON translation table (optional)
//!
//! `.env.local` and `.env` at the workspace root are read first, without
//! overriding variables already set in the process environment.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const LOG_ENV: &str = "LAUNDRY_LOG";
pub const CATALOGUE_ENV: &str = "LAUNDRY_CATALOGUE";
pub const LOCALE_ENV: &str = "LAUNDRY_LOCALE";

pub const DEFAULT_LOG_FILTER: &str = "laundry_engine=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{setting} points to a missing file: {}", .path.display())]
    MissingFile { setting: String, path: PathBuf },

    #[error("{setting} is set but empty")]
    Empty { setting: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub log_filter: String,
    pub catalogue_path: Option<PathBuf>,
    pub locale_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            catalogue_path: None,
            locale_path: None,
        }
    }
}

impl EngineConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// Unset variables take their defaults. A path variable that is set must
    /// name an existing file.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = match lookup(LOG_ENV) {
            None => DEFAULT_LOG_FILTER.to_string(),
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    setting: LOG_ENV.to_string(),
                })
            }
            Some(value) => value.trim().to_string(),
        };

        Ok(Self {
            log_filter,
            catalogue_path: existing_path(CATALOGUE_ENV, lookup(CATALOGUE_ENV))?,
            locale_path: existing_path(LOCALE_ENV, lookup(LOCALE_ENV))?,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        catalogue: Option<PathBuf>,
        locale: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = catalogue {
            self.catalogue_path = Some(require_file("--catalogue", path)?);
        }
        if let Some(path) = locale {
            self.locale_path = Some(require_file("--locale", path)?);
        }
        Ok(self)
    }
}

fn existing_path(setting: &str, value: Option<String>) -> Result<Option<PathBuf>, ConfigError> {
    let Some(value) = value.map(|v| v.trim().to_string()) else {
        return Ok(None);
    };
    if value.is_empty() {
        return Err(ConfigError::Empty {
            setting: setting.to_string(),
        });
    }
    require_file(setting, PathBuf::from(value)).map(Some)
}

fn require_file(setting: &str, path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::MissingFile {
            setting: setting.to_string(),
            path,
        })
    }
}

/// Loads `.env.local` then `.env` from `dir`, if present.
///
/// Returns the files that were read; unreadable files are skipped.
pub fn load_dotenv(dir: &Path) -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if !path.exists() {
            continue;
        }
        if dotenvy::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }
    loaded
}

/// Workspace root, two levels above this crate's manifest.
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log_filter, "laundry_engine=info");
    }

    #[test]
    fn reads_existing_paths() {
        let catalogue = tempfile::NamedTempFile::new().expect("temp file");
        let catalogue_path = catalogue.path().to_string_lossy().to_string();
        let config = EngineConfig::from_lookup(lookup(&[
            (CATALOGUE_ENV, catalogue_path.as_str()),
            (LOG_ENV, " laundry_engine=debug "),
        ]))
        .expect("config loads");
        assert_eq!(config.catalogue_path.as_deref(), Some(catalogue.path()));
        assert_eq!(config.log_filter, "laundry_engine=debug");
        assert_eq!(config.locale_path, None);
    }

    #[test]
    fn rejects_missing_and_empty_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.json");
        let missing_text = missing.to_string_lossy().to_string();
        let err = EngineConfig::from_lookup(lookup(&[(LOCALE_ENV, missing_text.as_str())]))
            .expect_err("missing file rejected");
        assert_eq!(
            err,
            ConfigError::MissingFile {
                setting: LOCALE_ENV.to_string(),
                path: missing,
            }
        );

        let err = EngineConfig::from_lookup(lookup(&[(LOG_ENV, "  ")])).expect_err("empty");
        assert_eq!(err.to_string(), "LAUNDRY_LOG is set but empty");
    }

    #[test]
    fn overrides_replace_environment() {
        let locale = tempfile::NamedTempFile::new().expect("temp file");
        let config = EngineConfig::default()
            .with_overrides(None, Some(locale.path().to_path_buf()))
            .expect("override applies");
        assert_eq!(config.locale_path.as_deref(), Some(locale.path()));

        let err = EngineConfig::default()
            .with_overrides(Some(PathBuf::from("/definitely/not/here.json")), None)
            .expect_err("missing override rejected");
        assert!(matches!(err, ConfigError::MissingFile { ref setting, .. } if setting == "--catalogue"));
    }

    #[test]
    fn dotenv_files_are_optional() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_dotenv(dir.path()).is_empty());

        std::fs::write(dir.path().join(".env"), "LAUNDRY_TEST_DOTENV_ONLY=1\n").expect("write .env");
        assert_eq!(load_dotenv(dir.path()), vec![dir.path().join(".env")]);
    }
}
