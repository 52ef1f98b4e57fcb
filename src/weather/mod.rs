//! Weather Module
//!
//! Request handling for the weather service.
//!
//! ## Responsibilities
//! - Decide which cities the service answers for
//! - Validate incoming queries
//! - Produce synthetic readings within fixed per-kind ranges
//!
//! Everything in here is free of I/O. The handler is shared read-only
//! between connection workers.

mod cities;
mod source;
mod handler;

pub use cities::{CityRegistry, SUPPORTED_CITIES};
pub use source::{FixedSource, RandomSource, ValueSource};
pub use handler::Handler;
