//! Configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Defaults applied to money fields built from configuration.
    #[serde(default)]
    pub money_field: MoneyFieldConfig,
}

/// Money field configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MoneyFieldConfig {
    /// Currency codes offered by the currency selector, in display order.
    /// Empty means free-text currency entry.
    #[serde(default)]
    pub allowed_currencies: Vec<String>,
    /// Locale tag stored on the field.
    #[serde(default)]
    pub locale: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `MONETA__*` environment variables. Lists in the environment are
    /// comma separated.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONETA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("money_field.allowed_currencies")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
