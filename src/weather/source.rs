//! Value sources
//!
//! Pluggable producers of weather readings.

use rand::Rng;

use crate::protocol::QueryKind;

/// Produces a reading for a query kind.
///
/// Implementations must return a value inside `kind.range()`.
pub trait ValueSource: Send + Sync {
    fn sample(&self, kind: QueryKind) -> f32;
}

/// Uniform random readings.
///
/// Uses the thread-local generator, which is seeded from OS entropy once per
/// thread, so separate runs do not repeat each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSource;

impl ValueSource for RandomSource {
    fn sample(&self, kind: QueryKind) -> f32 {
        rand::thread_rng().gen_range(kind.range())
    }
}

/// Always returns the same reading, clamped into the kind's range.
/// NaN maps to the low end of the range.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f32);

impl ValueSource for FixedSource {
    fn sample(&self, kind: QueryKind) -> f32 {
        let range = kind.range();
        if self.0.is_nan() {
            return *range.start();
        }
        self.0.clamp(*range.start(), *range.end())
    }
}
