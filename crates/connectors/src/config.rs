//! Data source configuration.

use crate::error::DbError;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

const MEMORY_URL: &str = "sqlite::memory:";
const FILE_PREFIX: &str = "sqlite://";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub location: StoreLocation,
    /// Enforce `FOREIGN KEY` constraints (`PRAGMA foreign_keys`).
    pub foreign_keys: bool,
    /// Create the entity tables on open when they are missing.
    pub create_schema: bool,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            location: StoreLocation::Memory,
            foreign_keys: true,
            create_schema: true,
        }
    }
}

impl DataSourceConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            ..Self::default()
        }
    }

    /// Parses `sqlite::memory:` or `sqlite://<path>`.
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let url = url.trim();
        if url == MEMORY_URL || url == ":memory:" {
            return Ok(Self::in_memory());
        }

        match url.strip_prefix(FILE_PREFIX) {
            Some(path) if !path.is_empty() => Ok(Self::file(path)),
            _ => Err(DbError::InvalidUrl(url.to_string())),
        }
    }
}

impl FromStr for DataSourceConfig {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(s)
    }
}

impl fmt::Display for DataSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            StoreLocation::Memory => write!(f, "{MEMORY_URL}"),
            StoreLocation::File(path) => write!(f, "{FILE_PREFIX}{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSourceConfig, StoreLocation};
    use crate::error::DbError;
    use std::path::PathBuf;

    #[test]
    fn test_parse_memory_url() {
        let config: DataSourceConfig = "sqlite::memory:".parse().unwrap();
        assert_eq!(config, DataSourceConfig::default());
    }

    #[test]
    fn test_parse_file_url() {
        let config = DataSourceConfig::from_url("sqlite://data/shop.db").unwrap();
        assert_eq!(
            config.location,
            StoreLocation::File(PathBuf::from("data/shop.db"))
        );
        assert_eq!(config.to_string(), "sqlite://data/shop.db");
    }

    #[test]
    fn test_reject_unknown_scheme() {
        assert!(matches!(
            DataSourceConfig::from_url("postgres://localhost/db"),
            Err(DbError::InvalidUrl(_))
        ));
        assert!(DataSourceConfig::from_url("sqlite://").is_err());
    }
}
