//! Engine configuration.

use serde::Deserialize;

/// Bounds the engine enforces before running the optimal strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Largest amount, in grid units, the optimal strategy will tabulate.
    #[serde(default = "default_max_optimal_units")]
    pub max_optimal_units: u64,
    /// Most decimal places the common integer grid may need.
    #[serde(default = "default_max_grid_scale")]
    pub max_grid_scale: u32,
}

fn default_max_optimal_units() -> u64 {
    1_000_000
}

fn default_max_grid_scale() -> u32 {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_optimal_units: default_max_optimal_units(),
            max_grid_scale: default_max_grid_scale(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `config/denom.toml` (optional)
    /// - `config/denom.{RUN_MODE}.toml` (optional, `RUN_MODE` defaults to `development`)
    /// - `DENOM_*` environment variables, e.g. `DENOM_MAX_OPTIMAL_UNITS`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/denom").required(false))
            .add_source(config::File::with_name(&format!("config/denom.{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DENOM").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
