//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - Worker thread pool for connections (one worker = strictly serial)
//! - One request and one response per connection

mod server;
mod connection;
mod client;

pub use server::{Server, ShutdownHandle};
use connection::Connection;
pub use client::{
    describe_response, describe_unknown_status, display_city, parse_query,
    supported_cities_help, WeatherClient,
};
