//! City registry
//!
//! The closed set of cities the service has readings for.

/// Supported cities, lower-case
pub const SUPPORTED_CITIES: [&str; 10] = [
    "bari", "roma", "milano", "napoli", "torino",
    "palermo", "genova", "bologna", "firenze", "venezia",
];

/// Case-insensitive lookup over `SUPPORTED_CITIES`
#[derive(Debug, Clone, Copy, Default)]
pub struct CityRegistry;

impl CityRegistry {
    pub fn new() -> Self {
        CityRegistry
    }

    /// Exact match after ASCII lower-casing. No trimming, no prefixes.
    pub fn is_supported(&self, name: &str) -> bool {
        SUPPORTED_CITIES
            .iter()
            .any(|city| city.eq_ignore_ascii_case(name))
    }

    pub fn cities(&self) -> &'static [&'static str] {
        &SUPPORTED_CITIES
    }
}
