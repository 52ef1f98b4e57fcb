//! Weather CLI Client
//!
//! Sends one query to a weather server and prints the answer.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use weatherd::config::{DEFAULT_HOST, DEFAULT_PORT};
use weatherd::network::{
    describe_response, describe_unknown_status, parse_query, supported_cities_help, WeatherClient,
};
use weatherd::WeatherError;

/// Weather CLI
#[derive(Parser, Debug)]
#[command(name = "weather-client")]
#[command(about = "Query a weather server")]
#[command(version)]
#[command(after_help = supported_cities_help())]
struct Args {
    /// Server host name or IP address
    #[arg(short, long, default_value = DEFAULT_HOST)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Request as "KIND CITY", KIND one of t (temperature), h (humidity),
    /// w (wind), p (pressure)
    #[arg(short, long)]
    request: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let request = match parse_query(&args.request) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let client = match WeatherClient::connect((args.server.as_str(), args.port)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to connect to {}:{}: {}", args.server, args.port, e);
            std::process::exit(1);
        }
    };
    let server_ip = client.peer_addr().ip();

    let outcome = match client.query(&request) {
        Ok(response) => describe_response(&request, &response),
        Err(WeatherError::UnknownStatus(code)) => describe_unknown_status(code),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Received result from server ip {}. {}", server_ip, outcome);
}
