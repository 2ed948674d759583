//! Spec-driven grouped numeric summaries over XML documents.
//!
//! Summit turns a hierarchical XML document into grouped numeric summaries,
//! driven by a compact textual specification instead of a programmatic API:
//!
//! - A **summary spec** names the target node, an orientation code, a
//!   grouping field and the fields to aggregate:
//!   `"Item,1,Category:Group,Price:Total:1,Qty:Count:2"`.
//! - A **format options** string tunes output rendering:
//!   `"rd=2,cu=USD,sc=1,tm=1"`.
//! - Both can travel as one combined string separated by a delimiter
//!   (default `";"`).
//!
//! The engine selects every node matching the target, buckets nodes by the
//! grouping field's text, accumulates streaming statistics (sum, count,
//! min, max, mean, population standard deviation) per group per field, and
//! renders the requested measure of each field into an insertion-ordered
//! [`SummaryMap`] — or a JSON string when `asJson` is set.
//!
//! ```
//! use summit_engine::summarize_combined;
//!
//! let xml = "<Root><Item><Category>A</Category><Price>100</Price></Item></Root>";
//! let out = summarize_combined(xml, "Item,1,Category:Group,Price:Total:1;rd=2").unwrap();
//! let grouped = out.as_grouped().unwrap();
//! assert_eq!(grouped.keys().collect::<Vec<_>>(), ["A"]);
//! ```

mod engine;
mod error;
mod format;
mod map;
mod model;
mod parse;
mod stats;
mod xml;

pub use engine::{
    summarize, summarize_combined, summarize_combined_with, summarize_spec, SummaryOutput,
};
pub use error::{SpecError, SummaryError};
pub use map::SummaryMap;
pub use model::{
    AggregatedField, AggregatedValue, FieldSpec, FormatOptions, Measure, Orientation,
    SummaryRequest,
};
pub use parse::{parse_combined, parse_options, parse_summary, DEFAULT_DELIMITER};
pub use stats::FieldStats;
