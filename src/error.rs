use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidelobeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SidelobeError>;
