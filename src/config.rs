use crate::error::AppError;
use cat_gallery::GridLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_ENV: &str = "CATPHOTOS_CONFIG";

/// Settings of the remote photo source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatApiConfig {
    pub base_url: String,
    /// Number of photos requested per load
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for CatApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.thecatapi.com/v1".to_string(),
            limit: 10,
            timeout_secs: 30,
        }
    }
}

/// Application configuration
///
/// ```toml
/// [api]
/// base_url = "https://api.thecatapi.com/v1"
/// limit = 20
///
/// [grid]
/// min_column_width = 160.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: CatApiConfig,
    pub grid: GridLayout,
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads the file named by `CATPHOTOS_CONFIG`, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            log::debug!("{} not set, using default configuration", CONFIG_ENV);
            return Self::default();
        };

        let path = Path::new(&path);
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Ignoring configuration {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.limit, 10);
        assert_eq!(config.grid.min_column_width, 200.0);
        assert_eq!(config.grid.aspect_ratio, 1.5);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            limit = 25

            [grid]
            min_column_width = 160.0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.limit, 25);
        assert_eq!(config.api.base_url, "https://api.thecatapi.com/v1");
        assert_eq!(config.grid.min_column_width, 160.0);
        assert_eq!(config.grid.cell_margin, 4.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml("[api]\nlimit = \"many\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file(Path::new("/nonexistent/catphotos.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
