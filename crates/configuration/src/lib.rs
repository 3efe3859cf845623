use crate::error::ConfigError;
use config::builder::{ConfigBuilder, DefaultState};
use rust_decimal::Decimal;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Account, Config, Discipline, RuleSettings};

/// Prefix for environment overrides, e.g. `TRADEFORGE_ACCOUNT__BALANCE=25000`.
const ENV_PREFIX: &str = "TRADEFORGE";

/// Loads the application configuration from a TOML file.
///
/// A missing file is not an error: every section has defaults, and
/// environment variables are layered on top either way.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "Config file not found. Using defaults.");
    }
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false));
    finish(builder, environment())
}

/// Parses configuration from TOML text, with the same environment overrides.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml));
    finish(builder, environment())
}

/// `TRADEFORGE_DISCIPLINE__ALERT_LOSS_THRESHOLD` maps to
/// `discipline.alert_loss_threshold`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn finish(
    builder: ConfigBuilder<DefaultState>,
    env: config::Environment,
) -> Result<Config, ConfigError> {
    let settings = builder.add_source(env).build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.account.balance <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(format!(
            "account.balance must be positive, got {}",
            config.account.balance
        )));
    }
    if config.discipline.alert_loss_threshold > Decimal::ZERO {
        return Err(ConfigError::ValidationError(format!(
            "discipline.alert_loss_threshold must not be positive, got {}",
            config.discipline.alert_loss_threshold
        )));
    }
    for (i, rule) in config.discipline.rules.iter().enumerate() {
        if config.discipline.rules[..i].iter().any(|r| r.id == rule.id) {
            return Err(ConfigError::ValidationError(format!(
                "discipline.rules has more than one rule with id '{}'",
                rule.id
            )));
        }
    }
    Ok(())
}
