//! Reference data and tunable constants, loaded from TOML files

mod armor;
mod constants;
mod weapons;

pub use armor::{ArmorDb, ArmorInfo};
pub use constants::{CombatConstants, GameConstants, LoaderConstants, ProgressionConstants};
pub use weapons::{DamageRange, Weapon, WeaponDb};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown armor: {0}")]
    UnknownArmor(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
