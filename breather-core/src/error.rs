use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreatherError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
