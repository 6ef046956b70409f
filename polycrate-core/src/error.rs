//! Error types for polycrate

use thiserror::Error;

/// Main error type for polycrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for polycrate operations
pub type Result<T> = std::result::Result<T, Error>;
