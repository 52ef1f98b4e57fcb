//! Request handler
//!
//! Turns one decoded request into one response.

use crate::protocol::{QueryKind, WeatherRequest, WeatherResponse};

use super::{CityRegistry, RandomSource, ValueSource};

/// Validates requests and produces readings
///
/// Holds no per-request state; one instance serves every connection.
#[derive(Debug, Clone, Default)]
pub struct Handler<S = RandomSource> {
    registry: CityRegistry,
    source: S,
}

impl Handler<RandomSource> {
    /// Create a handler backed by random readings
    pub fn new() -> Self {
        Self::with_source(RandomSource)
    }
}

impl<S: ValueSource> Handler<S> {
    /// Create a handler with a custom value source
    pub fn with_source(source: S) -> Self {
        Self {
            registry: CityRegistry::new(),
            source,
        }
    }

    /// Handle a request
    ///
    /// Checks run in order, first failure wins:
    /// 1. unknown kind -> INVALID_REQUEST
    /// 2. unknown city -> CITY_UNAVAILABLE
    /// 3. otherwise SUCCESS with a sampled reading
    pub fn handle(&self, request: &WeatherRequest) -> WeatherResponse {
        let kind = match QueryKind::from_byte(request.kind) {
            Some(kind) => kind,
            None => {
                tracing::debug!("Rejecting unknown kind 0x{:02x}", request.kind);
                return WeatherResponse::invalid_request();
            }
        };

        if !self.registry.is_supported(&request.city) {
            tracing::debug!("City not available: {:?}", request.city);
            return WeatherResponse::city_unavailable();
        }

        let value = self.source.sample(kind);
        tracing::debug!("{} for {}: {:.1}", kind.label(), request.city, value);
        WeatherResponse::success(kind, value)
    }
}
