//! Pool configuration.
//!
//! A [`PoolConfig`] can be built in code or loaded from TOML:
//!
//! ```toml
//! name = "db"
//! capacity = 4
//! log_level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::utils::LogLevel;

/// Default number of buffered resources.
pub const DEFAULT_CAPACITY: usize = 8;

/// Configuration for a resource pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Human-readable name used in events and log lines. When absent the
    /// pool derives one from its id.
    pub name: Option<String>,

    /// Maximum number of idle resources kept for reuse. Must be positive.
    pub capacity: usize,

    /// Minimum level the default log observer reports.
    pub log_level: LogLevel,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: None,
            capacity: DEFAULT_CAPACITY,
            log_level: LogLevel::Info,
        }
    }
}

impl PoolConfig {
    /// Configuration with the given capacity and defaults elsewhere.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Set the pool name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the minimum level the default log observer reports.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Check that the configuration describes a usable pool.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = PoolConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = PoolConfig::with_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidCapacity(0)));
    }

    #[test]
    fn test_from_toml_str() {
        let config = PoolConfig::from_toml_str(
            r#"
            name = "db"
            capacity = 4
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            PoolConfig::with_capacity(4)
                .named("db")
                .with_log_level(LogLevel::Debug)
        );

        let partial = PoolConfig::from_toml_str("capacity = 2").unwrap();
        assert_eq!(partial.name, None);
        assert_eq!(partial.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_toml_str_errors() {
        assert_eq!(
            PoolConfig::from_toml_str("capacity = 0"),
            Err(ConfigError::InvalidCapacity(0))
        );
        assert!(matches!(
            PoolConfig::from_toml_str("capacity = -1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PoolConfig::from_toml_str("capacty = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_log_level_aliases() {
        let config = PoolConfig::from_toml_str("log_level = \"warn\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Warning);

        let config = PoolConfig::from_toml_str("log_level = \"err\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"cache\"\ncapacity = 3").unwrap();

        let config = PoolConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name.as_deref(), Some("cache"));
        assert_eq!(config.capacity, 3);

        let missing = PoolConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
