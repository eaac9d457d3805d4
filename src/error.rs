use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Translate {
        path: PathBuf,
        #[source]
        source: gtkcss::GtkCssError,
    },

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("self-test failed: {0} of {1} cases")]
    SelfTest(usize, usize),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
