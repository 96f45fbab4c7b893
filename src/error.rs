use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoshiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot determine terminal width: {0}")]
    Terminal(String),

    #[error("Failed to retrieve stars: {0}")]
    Retrieval(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("Cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HoshiError {
    /// Process exit status for a fatal error. Flag-parse failures never reach
    /// here; clap exits with 2 on its own.
    pub fn exit_code(&self) -> i32 {
        match self {
            HoshiError::Interrupted => 130,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HoshiError>;
