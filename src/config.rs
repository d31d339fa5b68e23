//! Environment configuration
//!
//! Read once at startup. `.env` files are honored through dotenvy in the
//! binary; the library only looks at the process environment.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// The studio's contact, used when `MOGRA_WHATSAPP` is unset.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "917249611277";

#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// wa.me contact id: country code plus number, digits only, no `+`.
    pub whatsapp_number: String,
    /// Optional JSON catalog replacing the house collection.
    pub catalog_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let number = env::var("MOGRA_WHATSAPP")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        let catalog_path = env::var("MOGRA_CATALOG").ok().map(PathBuf::from);
        Self::from_parts(number, catalog_path)
    }

    fn from_parts(number: String, catalog_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsappNumber(number));
        }
        Ok(Self { whatsapp_number: number, catalog_path })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("whatsapp contact must be digits only, got {0:?}")]
    InvalidWhatsappNumber(String),
}
