//! City Registry Tests
//!
//! Tests verify:
//! - Every supported city matches in any ASCII case
//! - Near misses, empty names and padded names do not match

use weatherd::weather::{CityRegistry, SUPPORTED_CITIES};

#[test]
fn test_supported_cities_lowercase() {
    let registry = CityRegistry::new();
    for city in SUPPORTED_CITIES {
        assert!(registry.is_supported(city), "{} should be supported", city);
    }
}

#[test]
fn test_mixed_case() {
    let registry = CityRegistry::new();
    assert!(registry.is_supported("BARI"));
    assert!(registry.is_supported("Bari"));
    assert!(registry.is_supported("bAri"));
    assert!(registry.is_supported("VeNeZiA"));
}

#[test]
fn test_every_city_uppercase() {
    let registry = CityRegistry::new();
    for city in SUPPORTED_CITIES {
        assert!(registry.is_supported(&city.to_uppercase()));
    }
}

#[test]
fn test_unsupported_names() {
    let registry = CityRegistry::new();
    assert!(!registry.is_supported("Venice"));
    assert!(!registry.is_supported(""));
    assert!(!registry.is_supported("barii"));
    assert!(!registry.is_supported("bar"));
    assert!(!registry.is_supported("Londra"));
}

#[test]
fn test_no_trimming() {
    let registry = CityRegistry::new();
    assert!(!registry.is_supported(" bari"));
    assert!(!registry.is_supported("bari "));
}

#[test]
fn test_registry_lists_ten_cities() {
    assert_eq!(CityRegistry::new().cities().len(), 10);
}
