//! # weatherd
//!
//! A small weather lookup service over TCP with:
//! - Fixed-size, padding-free binary records
//! - A closed, case-insensitive registry of supported cities
//! - Synthetic readings from a pluggable value source
//! - A blocking client for one-shot queries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                             │
//! │          (acceptor thread + connection workers)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ 65-byte request record
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Protocol Codec                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ WeatherRequest
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Request Handler                            │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  City Registry  │                │   Value Source  │
//!   └─────────────────┘                └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod weather;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WeatherError, Result};
pub use config::Config;
pub use protocol::{QueryKind, Status, WeatherRequest, WeatherResponse};
pub use weather::{CityRegistry, Handler, ValueSource};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of weatherd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
