//! Response definitions
//!
//! Represents responses to clients.

use super::QueryKind;

/// Kind byte sent back when a request is rejected
pub const KIND_SENTINEL: u8 = 0;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    Success = 0,
    CityUnavailable = 1,
    InvalidRequest = 2,
}

impl Status {
    /// Parse a wire status code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Status::Success),
            1 => Some(Status::CityUnavailable),
            2 => Some(Status::InvalidRequest),
            _ => None,
        }
    }

    /// The wire status code
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResponse {
    /// Status code
    pub status: Status,

    /// Echo of the request kind, `KIND_SENTINEL` when rejected
    pub kind: u8,

    /// Reading, only meaningful on success
    pub value: f32,
}

impl WeatherResponse {
    /// Create a SUCCESS response carrying a reading
    pub fn success(kind: QueryKind, value: f32) -> Self {
        Self {
            status: Status::Success,
            kind: kind.as_byte(),
            value,
        }
    }

    /// Create a CITY_UNAVAILABLE response
    pub fn city_unavailable() -> Self {
        Self {
            status: Status::CityUnavailable,
            kind: KIND_SENTINEL,
            value: 0.0,
        }
    }

    /// Create an INVALID_REQUEST response
    pub fn invalid_request() -> Self {
        Self {
            status: Status::InvalidRequest,
            kind: KIND_SENTINEL,
            value: 0.0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
