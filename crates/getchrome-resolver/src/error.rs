use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to install Chrome via @puppeteer/browsers: {0}")]
    Installation(String),

    #[error("Chrome executable not found after installation in {}", cache_dir.display())]
    NotFound { cache_dir: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
