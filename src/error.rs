//! Error types for weatherd
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using WeatherError
pub type Result<T> = std::result::Result<T, WeatherError>;

/// Unified error type for weatherd operations
#[derive(Debug, Error)]
pub enum WeatherError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Unknown response status: {0}")]
    UnknownStatus(u32),

    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
