use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brand operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error: {0}")]
    #[diagnostic(code(brand::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(brand::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, BrandError>;
