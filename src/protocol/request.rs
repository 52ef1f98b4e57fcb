//! Request definitions
//!
//! Represents weather queries from clients.

use std::ops::RangeInclusive;

/// Maximum number of meaningful bytes in a city name.
/// The 64th byte of the wire field is reserved for the terminator.
pub const CITY_MAX_LEN: usize = 63;

/// Query kinds understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QueryKind {
    Temperature = b't',
    Humidity = b'h',
    Wind = b'w',
    Pressure = b'p',
}

impl QueryKind {
    /// All query kinds, in wire-character order of the reference client help
    pub const ALL: [QueryKind; 4] = [
        QueryKind::Temperature,
        QueryKind::Humidity,
        QueryKind::Wind,
        QueryKind::Pressure,
    ];

    /// Parse a raw kind byte. Exact, case-sensitive match.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(QueryKind::Temperature),
            b'h' => Some(QueryKind::Humidity),
            b'w' => Some(QueryKind::Wind),
            b'p' => Some(QueryKind::Pressure),
            _ => None,
        }
    }

    /// The wire character for this kind
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Inclusive range every reading of this kind falls into
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            QueryKind::Temperature => -10.0..=40.0,
            QueryKind::Humidity => 20.0..=100.0,
            QueryKind::Wind => 0.0..=100.0,
            QueryKind::Pressure => 950.0..=1050.0,
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Temperature => "Temperature",
            QueryKind::Humidity => "Humidity",
            QueryKind::Wind => "Wind",
            QueryKind::Pressure => "Pressure",
        }
    }

    /// Display unit, including any separating space
    pub fn unit(self) -> &'static str {
        match self {
            QueryKind::Temperature => "°C",
            QueryKind::Humidity => "%",
            QueryKind::Wind => " km/h",
            QueryKind::Pressure => " hPa",
        }
    }
}

/// A weather query
///
/// `kind` is kept as the raw byte so invalid kinds can travel to the handler
/// and be rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// Raw query-kind character
    pub kind: u8,

    /// City name, at most `CITY_MAX_LEN` bytes, no NUL
    pub city: String,
}

impl WeatherRequest {
    /// Create a request, normalising the city to what fits in a record
    pub fn new(kind: u8, city: impl AsRef<str>) -> Self {
        Self {
            kind,
            city: normalize_city(city.as_ref()).to_string(),
        }
    }

    /// Create a request for a known query kind
    pub fn for_kind(kind: QueryKind, city: impl AsRef<str>) -> Self {
        Self::new(kind.as_byte(), city)
    }

    /// The parsed query kind, if valid
    pub fn query_kind(&self) -> Option<QueryKind> {
        QueryKind::from_byte(self.kind)
    }
}

/// Cut `city` at the first NUL and at `CITY_MAX_LEN` bytes, never splitting
/// a UTF-8 sequence.
pub(crate) fn normalize_city(city: &str) -> &str {
    let city = match city.find('\0') {
        Some(nul) => &city[..nul],
        None => city,
    };

    if city.len() <= CITY_MAX_LEN {
        return city;
    }

    let mut end = CITY_MAX_LEN;
    while !city.is_char_boundary(end) {
        end -= 1;
    }
    &city[..end]
}
