use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML source or a `TRADEFORGE_*` override could not be read or typed.
    #[error("Failed to read configuration sources: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
