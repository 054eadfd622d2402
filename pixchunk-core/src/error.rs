use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixchunkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input path (Must be a valid file/directory)")]
    InvalidInputPath(PathBuf),

    #[error("Invalid output path (Must be a valid directory)")]
    InvalidOutputPath(PathBuf),

    /// Both paths failed the check; reported together, one reason per line.
    #[error(
        "Invalid input path (Must be a valid file/directory)\nInvalid output path (Must be a valid directory)"
    )]
    InvalidPaths { input: PathBuf, output: PathBuf },

    #[error("No suitable files found in input path")]
    NoImagesFound(PathBuf),

    #[error("group size must be between 1 and 10, got {0}")]
    InvalidGroupSize(usize),

    #[error("chunk size must be non-zero in both dimensions, got {width}x{height}")]
    InvalidChunkSize { width: u32, height: u32 },

    #[error("Format error: {0}")]
    Format(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PixchunkError>;
