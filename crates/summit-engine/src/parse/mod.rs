//! Parsers for the compact spec surface.
//!
//! Two deliberately different parsing policies live here:
//! - the summary grammar ([`parse_summary`]) is strict and fails fast;
//! - the options grammar ([`parse_options`]) is permissive — unknown keys
//!   and malformed parts are skipped without error.
//!
//! These are separate trust boundaries by design and must not be unified.

mod combined;
mod options;
mod summary;

pub use combined::{parse_combined, DEFAULT_DELIMITER};
pub use options::parse_options;
pub use summary::parse_summary;
