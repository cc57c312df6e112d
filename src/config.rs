use serde::Deserialize;
use std::io::Read;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
}

#[derive(Clone, Deserialize)]
pub struct Listen {
    pub host: Option<String>,
    pub port: u16,
}

/// Connection options for the task store.
///
/// `pool_max` bounds concurrent in-flight statements; requests beyond the
/// bound queue inside the pool.
#[derive(Clone, Deserialize)]
pub struct StorageConfig {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub database: String,
    pub pool_max: Option<u32>,
    pub pool_min: Option<u32>,
    pub idle_timeout_sec: Option<u64>,
}

#[derive(Deserialize)]
pub struct Config {
    pub listen: Listen,
    pub storage: StorageConfig,
    pub log: Option<crate::log::Log>,
}

impl Config {
    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }
}

pub mod testdata {
    use super::Config;

    #[allow(dead_code)]
    pub fn test_config() -> Config {
        Config::from_str(
            r#"
        log:
            level: trace
        listen:
            port: 5000
        storage:
            host: localhost
            port: 3306
            user: taskboard
            password: taskboard
            database: taskboard
            pool_max: 10
            pool_min: 0
            idle_timeout_sec: 30
        "#,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        // GIVEN
        let config = testdata::test_config();

        // THEN
        assert_eq!(config.listen.port, 5000);
        assert!(config.listen.host.is_none());
        assert_eq!(config.storage.host, "localhost");
        assert_eq!(config.storage.port, Some(3306));
        assert_eq!(config.storage.database, "taskboard");
        assert_eq!(config.storage.pool_max, Some(10));
        assert_eq!(config.storage.idle_timeout_sec, Some(30));
        assert_eq!(config.log.unwrap().level, "trace");
    }

    #[test]
    fn test_minimal_config() {
        // GIVEN
        let config = Config::from_str(
            r#"
        listen:
            port: 8080
        storage:
            host: db.internal
            user: app
            password: secret
            database: tasks
        "#,
        )
        .unwrap();

        // THEN
        assert_eq!(config.listen.port, 8080);
        assert!(config.storage.port.is_none());
        assert!(config.storage.pool_max.is_none());
        assert!(config.log.is_none());
    }

    #[test]
    fn test_malformed_config() {
        let result = Config::from_str("listen: [not, a, mapping]");
        assert!(result.is_err());
    }
}
