use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{ComputeSettings, Config, IoSettings, LogFormat, LoggingSettings};

/// Environment variables override file values, e.g. `FINPANEL__COMPUTE__THREADS=4`.
pub const ENV_PREFIX: &str = "FINPANEL";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the config file (an explicit `path`,
/// which must exist, or an optional `finpanel.toml` in the working directory), then
/// `FINPANEL__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("finpanel").required(false),
    };

    let builder = config::Config::builder()
        .set_default("io.input", "data/financial_statements.json")?
        .set_default("io.output", "data/financial_indices.json")?
        .set_default("io.pretty", true)?
        .set_default("compute.parallel", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "full")?
        .set_default("logging.file_prefix", "finpanel")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.compute.threads == Some(0) {
        return Err(ConfigError::ValidationError(
            "compute.threads must be at least 1".to_string(),
        ));
    }
    if config.logging.file_prefix.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.file_prefix must not be empty".to_string(),
        ));
    }
    Ok(())
}
