//! Weather Server Binary
//!
//! Starts the TCP weather service.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use weatherd::config::{DEFAULT_HOST, DEFAULT_PORT};
use weatherd::network::Server;
use weatherd::{Config, Handler};

/// Weather Server
#[derive(Parser, Debug)]
#[command(name = "weather-server")]
#[command(about = "Answers temperature, humidity, wind and pressure queries over TCP")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = DEFAULT_HOST)]
    bind: String,

    /// Connection worker threads (1 = serve clients one at a time)
    #[arg(short, long, default_value = "1")]
    workers: usize,

    /// Read timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,weatherd=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Weather Server v{}", weatherd::VERSION);

    let config = Config::builder()
        .listen_addr(format!("{}:{}", args.bind, args.port))
        .workers(args.workers)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    let server = match Server::bind(config, Handler::new()) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
