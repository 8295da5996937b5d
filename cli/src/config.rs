//! Configuration management for the plan CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FITPLAN__)

use anyhow::{Context, Result};
use fitplan_engine::reference::{ExerciseLibrary, FoodCatalog};
use fitplan_engine::ReferenceData;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::export::ExportFormat;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Fallback filter when RUST_LOG is unset
    pub filter: String,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Lines per page of the text document (0 disables paging)
    pub lines_per_page: usize,
    pub include_food_bank: bool,
}

/// Optional replacement reference tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub exercises_path: Option<String>,
    pub foods_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                json: false,
                filter: "fitplan_cli=info,fitplan_engine=info".to_string(),
            },
            export: ExportConfig {
                format: ExportFormat::Text,
                lines_per_page: 60,
                include_food_bank: true,
            },
            reference: ReferenceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FITPLAN__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_from(&format!("config/{}.toml", env))
    }

    /// Load with an explicit config file path
    pub fn load_from(config_file: &str) -> Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(config_file).required(false))
            // Override with environment variables (FITPLAN__ prefix)
            // e.g., FITPLAN__EXPORT__FORMAT=csv sets export.format
            .add_source(config::Environment::with_prefix("FITPLAN").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Reference tables to generate with
    ///
    /// Configured files replace the matching built-in table; anything not
    /// configured falls back to the shared built-in instance.
    pub fn reference_data(&self) -> Result<Cow<'static, ReferenceData>> {
        let builtin = ReferenceData::builtin();
        let reference = &self.reference;

        if reference.exercises_path.is_none() && reference.foods_path.is_none() {
            return Ok(Cow::Borrowed(builtin));
        }

        let exercises = match &reference.exercises_path {
            Some(path) => {
                let library = ExerciseLibrary::from_json(&read_table(path)?)
                    .with_context(|| format!("Invalid exercise table in {}", path))?;
                info!(path = %path, exercises = library.len(), "Loaded exercise table");
                library
            }
            None => builtin.exercises.clone(),
        };

        let foods = match &reference.foods_path {
            Some(path) => {
                let catalog = FoodCatalog::from_json(&read_table(path)?)
                    .with_context(|| format!("Invalid food table in {}", path))?;
                info!(path = %path, foods = catalog.len(), "Loaded food table");
                catalog
            }
            None => builtin.foods.clone(),
        };

        Ok(Cow::Owned(ReferenceData::new(foods, exercises)))
    }
}

fn read_table(path: &str) -> Result<String> {
    fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(!config.logging.json);
        assert_eq!(config.export.format, ExportFormat::Text);
        assert_eq!(config.export.lines_per_page, 60);
        assert!(config.reference.exercises_path.is_none());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from("config/does-not-exist.toml").unwrap();
        assert_eq!(config.export.lines_per_page, 60);
        assert!(config.export.include_food_bank);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[export]\nformat = \"csv\"\nlines_per_page = 40\ninclude_food_bank = false"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.export.format, ExportFormat::Csv);
        assert_eq!(config.export.lines_per_page, 40);
        assert!(!config.export.include_food_bank);
        // Untouched sections keep their defaults
        assert!(!config.logging.json);
    }

    #[test]
    fn test_builtin_reference_is_borrowed() {
        let data = AppConfig::default().reference_data().unwrap();
        assert!(matches!(data, Cow::Borrowed(_)));
    }

    #[test]
    fn test_reference_file_replaces_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"foods": [{{"name": "Seitan", "servingSize": "100g", "protein": 25,
                "carbs": 4, "fats": 2, "calories": 134, "category": "protein",
                "dietCompatibility": ["vegetarian"]}}]}}"#
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.reference.foods_path = Some(file.path().to_string_lossy().into_owned());

        let data = config.reference_data().unwrap();
        assert_eq!(data.foods.len(), 1);
        assert_eq!(data.exercises.len(), ReferenceData::builtin().exercises.len());
    }

    #[test]
    fn test_unreadable_reference_file_is_an_error() {
        let mut config = AppConfig::default();
        config.reference.exercises_path = Some("/nonexistent/exercises.json".to_string());

        let err = config.reference_data().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/exercises.json"));
    }
}
