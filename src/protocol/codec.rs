//! Protocol codec
//!
//! Encoding and decoding functions for the fixed-size records.
//!
//! ## Wire Format
//!
//! ### Request (65 bytes)
//! ```text
//! ┌──────────┬──────────────────────────────────────────┐
//! │ Kind (1) │ City (64, NUL-terminated, zero-filled)   │
//! └──────────┴──────────────────────────────────────────┘
//! ```
//!
//! ### Response (9 bytes)
//! ```text
//! ┌────────────┬──────────┬────────────┐
//! │ Status (4) │ Kind (1) │ Value (4)  │
//! └────────────┴──────────┴────────────┘
//! ```
//!
//! Status is a little-endian u32, value a little-endian IEEE-754 f32.
//! There is no padding between fields.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

use super::request::normalize_city;
use super::{Status, WeatherRequest, WeatherResponse, CITY_MAX_LEN};
use crate::error::{Result, WeatherError};

/// Width of the city field on the wire, terminator included
pub const CITY_FIELD_SIZE: usize = CITY_MAX_LEN + 1;

/// Request record size: kind (1) + city (64)
pub const REQUEST_SIZE: usize = 1 + CITY_FIELD_SIZE;

/// Response record size: status (4) + kind (1) + value (4)
pub const RESPONSE_SIZE: usize = 4 + 1 + 4;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to its record
///
/// The city is cut to 63 bytes so the field always keeps a terminator.
pub fn encode_request(request: &WeatherRequest) -> [u8; REQUEST_SIZE] {
    let mut record = [0u8; REQUEST_SIZE];
    let city = normalize_city(&request.city);

    let mut buf = &mut record[..];
    buf.put_u8(request.kind);
    buf.put_slice(city.as_bytes());

    record
}

/// Decode a request from bytes
///
/// Only the first `REQUEST_SIZE` bytes are looked at. The last byte of the
/// city field is always treated as a terminator, whatever the sender put there.
pub fn decode_request(bytes: &[u8]) -> Result<WeatherRequest> {
    if bytes.len() < REQUEST_SIZE {
        return Err(WeatherError::Protocol(format!(
            "Incomplete request: expected {} bytes, got {}",
            REQUEST_SIZE,
            bytes.len()
        )));
    }

    let kind = bytes[0];
    let field = &bytes[1..1 + CITY_MAX_LEN];
    let len = field.iter().position(|&b| b == 0).unwrap_or(CITY_MAX_LEN);
    let city = String::from_utf8_lossy(&field[..len]).into_owned();

    Ok(WeatherRequest { kind, city })
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to its record
pub fn encode_response(response: &WeatherResponse) -> [u8; RESPONSE_SIZE] {
    let mut record = [0u8; RESPONSE_SIZE];

    let mut buf = &mut record[..];
    buf.put_u32_le(response.status.code());
    buf.put_u8(response.kind);
    buf.put_f32_le(response.value);

    record
}

/// Decode a response from bytes
pub fn decode_response(bytes: &[u8]) -> Result<WeatherResponse> {
    if bytes.len() < RESPONSE_SIZE {
        return Err(WeatherError::Protocol(format!(
            "Incomplete response: expected {} bytes, got {}",
            RESPONSE_SIZE,
            bytes.len()
        )));
    }

    let mut buf = &bytes[..RESPONSE_SIZE];
    let code = buf.get_u32_le();
    let kind = buf.get_u8();
    let value = buf.get_f32_le();

    let status = Status::from_code(code).ok_or(WeatherError::UnknownStatus(code))?;

    Ok(WeatherResponse {
        status,
        kind,
        value,
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one request record from a stream
///
/// Blocks until the full record arrives. A peer that closes early yields an
/// `UnexpectedEof` I/O error.
pub fn read_request<R: Read>(reader: &mut R) -> Result<WeatherRequest> {
    let mut record = [0u8; REQUEST_SIZE];
    reader.read_exact(&mut record)?;
    decode_request(&record)
}

/// Write one request record to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &WeatherRequest) -> Result<()> {
    writer.write_all(&encode_request(request))?;
    writer.flush()?;
    Ok(())
}

/// Read one response record from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<WeatherResponse> {
    let mut record = [0u8; RESPONSE_SIZE];
    reader.read_exact(&mut record)?;
    decode_response(&record)
}

/// Write one response record to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &WeatherResponse) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}
