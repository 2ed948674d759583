//! Locale-aware numeric rendering for summary output.
//!
//! This crate provides the small rendering surface the aggregation engine
//! needs when turning finalized measure values into display text:
//! - [`locale`] — thousands-grouped decimal rendering with per-locale
//!   separators.
//! - [`currency`] — a registry of common ISO currency codes and a
//!   best-effort currency renderer.
//!
//! It intentionally stays dependency-free: callers that need richer
//! formatting (date systems, arbitrary format codes) should wrap their own
//! engine around these primitives.

pub mod currency;
pub mod locale;

pub use currency::{format_currency, get_currency, Currency};
pub use locale::{format_grouped, format_integer, NumberLocale, DE_DE, EN_US, ES_DO};

/// Round `value` to `decimals` fraction digits, half away from zero.
///
/// Returned as a number so callers can keep numeric output numeric
/// (rounding alone is not a string-rendering concern).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
