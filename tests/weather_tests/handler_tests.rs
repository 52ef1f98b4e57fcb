//! Handler Tests
//!
//! These tests verify:
//! - Valid kind + supported city yields SUCCESS with an in-range reading
//! - Invalid kinds are rejected before the city is looked at
//! - Unsupported cities yield CITY_UNAVAILABLE
//! - Custom value sources are used for readings

use weatherd::protocol::{QueryKind, Status, WeatherRequest, KIND_SENTINEL};
use weatherd::weather::{FixedSource, Handler, ValueSource, SUPPORTED_CITIES};

// =============================================================================
// Success Path Tests
// =============================================================================

#[test]
fn test_all_kinds_all_cities_in_range() {
    let handler = Handler::new();

    for kind in QueryKind::ALL {
        for city in SUPPORTED_CITIES {
            let response = handler.handle(&WeatherRequest::for_kind(kind, city));

            assert_eq!(response.status, Status::Success);
            assert_eq!(response.kind, kind.as_byte());
            assert!(
                kind.range().contains(&response.value),
                "{:?} for {} out of range: {}",
                kind,
                city,
                response.value
            );
        }
    }
}

#[test]
fn test_temperature_bari() {
    let handler = Handler::new();
    let response = handler.handle(&WeatherRequest::new(b't', "Bari"));

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.kind, b't');
    assert!((-10.0..=40.0).contains(&response.value));
}

#[test]
fn test_ranges_over_many_samples() {
    let handler = Handler::new();
    let bounds = [
        (b'h', 20.0, 100.0),
        (b'w', 0.0, 100.0),
        (b'p', 950.0, 1050.0),
    ];

    for (kind, low, high) in bounds {
        for _ in 0..500 {
            let value = handler.handle(&WeatherRequest::new(kind, "roma")).value;
            assert!(value >= low && value <= high, "{} out of [{}, {}]", value, low, high);
        }
    }
}

#[test]
fn test_uses_injected_source() {
    let handler = Handler::with_source(FixedSource(18.5));
    let response = handler.handle(&WeatherRequest::new(b't', "torino"));

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.value, 18.5);
}

#[test]
fn test_nan_fixed_source_stays_in_range() {
    let handler = Handler::with_source(FixedSource(f32::NAN));

    for kind in QueryKind::ALL {
        let response = handler.handle(&WeatherRequest::for_kind(kind, "bari"));
        assert_eq!(response.status, Status::Success);
        assert!(kind.range().contains(&response.value), "{:?}: {}", kind, response.value);
    }
}

struct KindEcho;

impl ValueSource for KindEcho {
    fn sample(&self, kind: QueryKind) -> f32 {
        *kind.range().start()
    }
}

#[test]
fn test_source_receives_request_kind() {
    let handler = Handler::with_source(KindEcho);
    assert_eq!(handler.handle(&WeatherRequest::new(b'p', "genova")).value, 950.0);
    assert_eq!(handler.handle(&WeatherRequest::new(b't', "genova")).value, -10.0);
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_invalid_kinds() {
    let handler = Handler::new();

    for kind in [b'x', b'T', b'H', 0u8, b'z', b' '] {
        let response = handler.handle(&WeatherRequest::new(kind, "bari"));
        assert_eq!(response.status, Status::InvalidRequest);
        assert_eq!(response.kind, KIND_SENTINEL);
        assert_eq!(response.value, 0.0);
    }
}

#[test]
fn test_invalid_kind_wins_over_unknown_city() {
    let handler = Handler::new();
    let response = handler.handle(&WeatherRequest::new(b'x', "Venice"));
    assert_eq!(response.status, Status::InvalidRequest);
}

#[test]
fn test_invalid_kind_roma() {
    let handler = Handler::new();
    let response = handler.handle(&WeatherRequest::new(b'z', "Roma"));

    assert_eq!(response.status, Status::InvalidRequest);
    assert_eq!(response.kind, 0);
    assert_eq!(response.value, 0.0);
}

#[test]
fn test_unsupported_city() {
    let handler = Handler::new();
    let response = handler.handle(&WeatherRequest::new(b't', "Venice"));

    assert_eq!(response.status, Status::CityUnavailable);
    assert_eq!(response.kind, KIND_SENTINEL);
    assert_eq!(response.value, 0.0);
}

#[test]
fn test_humidity_venice() {
    let handler = Handler::with_source(FixedSource(50.0));
    let response = handler.handle(&WeatherRequest::new(b'h', "Venice"));

    assert_eq!(response.status, Status::CityUnavailable);
    assert_eq!(response.kind, 0);
    assert_eq!(response.value, 0.0);
}

#[test]
fn test_empty_city() {
    let handler = Handler::new();
    let response = handler.handle(&WeatherRequest::new(b'w', ""));
    assert_eq!(response.status, Status::CityUnavailable);
}
