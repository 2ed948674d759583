use crate::error::SpecError;
use crate::model::{FormatOptions, SummaryRequest};
use crate::parse::{parse_options, parse_summary};

/// Default separator between the summary and options halves of a combined
/// spec string.
pub const DEFAULT_DELIMITER: &str = ";";

/// Split a combined `summary<delimiter>options` string and parse both
/// halves.
///
/// The input splits on the first occurrence of `delimiter`; both halves
/// must be non-empty after trimming, otherwise this fails with
/// [`SpecError::MissingSegment`].
pub fn parse_combined(
    input: &str,
    delimiter: &str,
) -> Result<(SummaryRequest, FormatOptions), SpecError> {
    let mut halves = input.splitn(2, delimiter).map(str::trim);
    let summary = halves.next().unwrap_or("");
    let options = halves.next().unwrap_or("");

    if summary.is_empty() || options.is_empty() {
        return Err(SpecError::MissingSegment {
            delimiter: delimiter.to_string(),
        });
    }

    Ok((parse_summary(summary)?, parse_options(options)))
}
