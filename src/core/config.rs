use std::env;
use std::path::PathBuf;

use crate::core::error::{AppError, Result};
use crate::features::admins::models::ReplacementKey;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub directory: DirectoryConfig,
}

/// Where the geography fixture comes from
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON fixture overriding the embedded catalog (optional)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// How district/sector upserts find the record they replace
    pub replacement_key: ReplacementKey,
    /// Seed the demo administrators at startup
    pub seed_demo_admins: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            catalog: CatalogConfig::from_env().map_err(AppError::Config)?,
            directory: DirectoryConfig::from_env().map_err(AppError::Config)?,
        })
    }
}

impl CatalogConfig {
    pub fn from_env() -> std::result::Result<Self, String> {
        let path = env::var("GEOGRAPHY_CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { path })
    }
}

impl DirectoryConfig {
    const DEFAULT_REPLACEMENT_KEY: &'static str = "leaf";
    const DEFAULT_SEED_DEMO_ADMINS: bool = false;

    pub fn from_env() -> std::result::Result<Self, String> {
        let replacement_key = env::var("ADMIN_REPLACEMENT_KEY")
            .unwrap_or_else(|_| Self::DEFAULT_REPLACEMENT_KEY.to_string())
            .parse::<ReplacementKey>()?;

        let seed_demo_admins = env::var("SEED_DEMO_ADMINS")
            .unwrap_or_else(|_| Self::DEFAULT_SEED_DEMO_ADMINS.to_string())
            .parse::<bool>()
            .map_err(|_| "SEED_DEMO_ADMINS must be true or false".to_string())?;

        Ok(Self {
            replacement_key,
            seed_demo_admins,
        })
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            replacement_key: ReplacementKey::default(),
            seed_demo_admins: Self::DEFAULT_SEED_DEMO_ADMINS,
        }
    }
}
