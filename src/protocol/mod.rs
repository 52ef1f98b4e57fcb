//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (fixed records)
//!
//! One request record, then one response record, per TCP connection.
//! There is no framing and no versioning: both records have a fixed size.
//!
//! ### Request Record
//! | offset | size | field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 1    | kind (`t`, `h`, `w`, `p`; raw byte)     |
//! | 1      | 64   | city (UTF-8, NUL-terminated, zero-fill) |
//!
//! ### Response Record
//! | offset | size | field                             |
//! |--------|------|-----------------------------------|
//! | 0      | 4    | status (u32 LE)                   |
//! | 4      | 1    | kind echo (0 when rejected)       |
//! | 5      | 4    | value (f32 LE, IEEE-754 binary32) |
//!
//! ### Status Codes
//! - 0: SUCCESS
//! - 1: CITY_UNAVAILABLE
//! - 2: INVALID_REQUEST

mod request;
mod response;
mod codec;

pub use request::{QueryKind, WeatherRequest, CITY_MAX_LEN};
pub use response::{Status, WeatherResponse, KIND_SENTINEL};
pub use codec::{
    encode_request, decode_request, encode_response, decode_response,
    read_request, write_request, read_response, write_response,
    CITY_FIELD_SIZE, REQUEST_SIZE, RESPONSE_SIZE,
};
