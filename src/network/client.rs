//! Weather Client
//!
//! Blocking client performing one request/response exchange per connection,
//! plus the helpers the command-line client uses to build requests and
//! render responses.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::error::{Result, WeatherError};
use crate::protocol::{read_response, write_request, QueryKind, Status, WeatherRequest, WeatherResponse};
use crate::weather::CityRegistry;

/// A connection to a weather server
pub struct WeatherClient {
    stream: TcpStream,
    peer_addr: SocketAddr,
}

impl WeatherClient {
    /// Connect to the first reachable address `addr` resolves to
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        let peer_addr = stream.peer_addr()?;
        stream.set_nodelay(true)?;

        Ok(Self { stream, peer_addr })
    }

    /// Send one request and wait for its response
    ///
    /// Consumes the client: the server closes the connection after replying.
    pub fn query(mut self, request: &WeatherRequest) -> Result<WeatherResponse> {
        tracing::debug!("Sending {:?} to {}", request, self.peer_addr);
        write_request(&mut self.stream, request)?;
        read_response(&mut self.stream)
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }
}

/// Parse a `"KIND CITY"` argument
///
/// The first character is the kind, spaces after it are skipped and the rest
/// is the city. The kind is not validated here; the server decides.
pub fn parse_query(arg: &str) -> Result<WeatherRequest> {
    let first = arg
        .chars()
        .next()
        .ok_or_else(|| WeatherError::InvalidArgument("request string is empty".to_string()))?;

    let kind = arg.as_bytes()[0];
    let city = arg[first.len_utf8()..].trim_start_matches(' ');

    Ok(WeatherRequest::new(kind, city))
}

/// City name as shown to the user: first letter upper-case, rest lower-case
pub fn display_city(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(city.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// One-line description of a response to `request`
pub fn describe_response(request: &WeatherRequest, response: &WeatherResponse) -> String {
    match response.status {
        Status::Success => match QueryKind::from_byte(response.kind) {
            Some(kind) => format!(
                "{}: {} = {:.1}{}",
                display_city(&request.city),
                kind.label(),
                response.value,
                kind.unit()
            ),
            None => "Unknown type in response".to_string(),
        },
        Status::CityUnavailable => "City not available".to_string(),
        Status::InvalidRequest => "Invalid request".to_string(),
    }
}

/// Line printed when the server answers with a status this client does not know
pub fn describe_unknown_status(code: u32) -> String {
    format!("Unknown error (status={})", code)
}

/// Help text listing the cities the server answers for
pub fn supported_cities_help() -> String {
    format!("Supported cities: {}", CityRegistry::new().cities().join(", "))
}
