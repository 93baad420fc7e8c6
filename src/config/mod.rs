//! Server configuration: YAML file in the platform config directory, with
//! environment-variable and CLI overrides layered on top.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_listen_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskcost-server")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("taskcost.yml")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("taskcost.sqlite")
    }

    /// Load configuration from file (defaults when absent), then apply
    /// environment overrides: TASKCOST_DATABASE, TASKCOST_LISTEN_ADDR,
    /// TASKCOST_PORT.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))?
        } else {
            Config::default()
        };

        if let Ok(db) = env::var("TASKCOST_DATABASE") {
            cfg.database = db;
        }
        if let Ok(addr) = env::var("TASKCOST_LISTEN_ADDR") {
            cfg.listen_addr = addr;
        }
        if let Ok(port) = env::var("TASKCOST_PORT") {
            cfg.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("invalid TASKCOST_PORT: {port}")))?;
        }

        Ok(cfg)
    }

    /// Initialize the config directory and file, resolving the database path.
    /// In test mode nothing is written; the resolved path is returned either way.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() || name == ":memory:" {
                    name
                } else {
                    dir.join(p).to_string_lossy().to_string()
                }
            }
            None => Self::database_file().to_string_lossy().to_string(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.clone(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("failed to serialize config: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}
