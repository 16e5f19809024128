use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings};

/// File read when no explicit path is given. Its absence is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `CATALOG__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "CATALOG";

/// Loads the application configuration.
///
/// Sources are merged in order, later ones winning: built-in defaults, the
/// TOML file (`path`, or `config.toml` if present), `CATALOG__*` environment
/// variables and finally `DATABASE_URL`. A `.env` file in the working
/// directory is loaded first so its values take part as environment variables.
///
/// The result is not validated: callers apply their own overrides (e.g. CLI
/// flags) first and then call [`Settings::validate`].
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    build_settings(path, std::env::var("DATABASE_URL").ok())
}

fn build_settings(path: Option<&Path>, database_url: Option<String>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000_i64)?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("database.run_migrations", true)?
        .set_default("logging.filter", "info")?
        .set_default("logging.file_prefix", "catalog.log")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.url", database_url)?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
