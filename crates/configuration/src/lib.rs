//! # Orderlens Configuration
//!
//! Loads the report parameters from `config.toml` and exposes them as a
//! strongly-typed `Config` struct. Every parameter has a default matching the
//! reference scenario (California/Texas, the 500/1000/2000 thresholds, New
//! York City on 10/21/2021, top 10), so the file is optional and may override
//! only the values the operator cares about.

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{CityDateParams, Config, HighValueParams, PremiumParams, TopRegionsParams};

/// Loads the application configuration from the file at `path`.
///
/// The file is optional: when it is absent the reference-scenario defaults
/// apply. When it is present, any value it sets overrides the default, and
/// the merged result is validated before it is returned.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
