//! Configuration manager for signup.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const VERSION: &str = env!("CARGO_PKG_VERSION");
/// RFC 5321 path limit.
const DEFAULT_EMAIL_MAX_LENGTH: usize = 254;

/// Errors that may occur while loading `config.yaml`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to deserialize `config.yaml`: {0}")]
    Deserialize(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Fallback directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Related to email acceptance.
    pub email: EmailPolicy,
    #[serde(skip_deserializing)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            log_level: "info".to_owned(),
            email: EmailPolicy::default(),
            version: VERSION.to_owned(),
            path: PathBuf::default(),
        }
    }
}

/// Email acceptance rules used by the default validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPolicy {
    /// Longest accepted address.
    pub max_length: usize,
    /// Domains refused regardless of formatting.
    pub blocked_domains: Vec<String>,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_EMAIL_MAX_LENGTH,
            blocked_domains: Vec::new(),
        }
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Crate version serving requests.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Loads the `config.yaml` file from the specified path or the default
    /// location.
    pub fn load(&self) -> Result<Self, Error> {
        let file_path = if self.path.is_file() {
            self.path.as_path()
        } else {
            Path::new(DEFAULT_CONFIG_PATH)
        };

        let file = File::open(file_path)?;
        let mut config: Configuration = serde_yaml::from_reader(file)?;

        // set app version.
        config.version = VERSION.to_owned();
        config.path = file_path.to_path_buf();

        Ok(config)
    }

    /// Same as [`Configuration::load`], falling back to defaults on failure.
    pub fn read(self) -> Arc<Self> {
        match self.load() {
            Ok(config) => Arc::new(config),
            Err(err) => Arc::new(self.error(err)),
        }
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file cannot be read");
        Self {
            path: self.path.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("signup-{}-{name}.yaml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_config_file() {
        let path = write_config(
            "full",
            concat!(
                "name: accounts\n",
                "log_level: debug\n",
                "email:\n",
                "  max_length: 64\n",
                "  blocked_domains:\n",
                "    - mailinator.com\n",
            ),
        );

        let config = Configuration::default().path(path.clone()).read();
        std::fs::remove_file(path).unwrap();

        assert_eq!(config.name, "accounts");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.email.max_length, 64);
        assert_eq!(config.email.blocked_domains, vec!["mailinator.com"]);
        assert_eq!(config.version(), VERSION);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = write_config("partial", "name: accounts\n");

        let config = Configuration::default().path(path.clone()).load();
        std::fs::remove_file(path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.name, "accounts");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.email, EmailPolicy::default());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let path = write_config("malformed", "email: [not, a, map]\n");

        let loaded = Configuration::default().path(path.clone()).load();
        let config = Configuration::default().path(path.clone()).read();
        std::fs::remove_file(path).unwrap();

        assert!(matches!(loaded, Err(Error::Deserialize(_))));
        assert_eq!(config.name, env!("CARGO_PKG_NAME"));
        assert_eq!(config.email.max_length, DEFAULT_EMAIL_MAX_LENGTH);
    }
}
