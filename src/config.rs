use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: Self::get_env_or("DATABASE_URL", "sqlite:books.db?mode=rwc"),
            upload_dir: Self::get_env_or("UPLOAD_DIR", "uploads"),
            port: Self::get_env_u16("PORT", 8000)?,
        })
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn get_env_u16(key: &str, default: u16) -> Result<u16, ConfigError> {
        match env::var(key) {
            Ok(val) => val
                .parse::<u16>()
                .map_err(|e| ConfigError::ParseError(key.to_string(), e)),
            Err(_) => Ok(default),
        }
    }
}
