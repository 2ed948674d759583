use thiserror::Error;

/// Parse-time failures of the spec grammars.
///
/// All four are fatal to the parse call; no partial result is returned.
/// Aggregation-time anomalies (unknown measure codes, absent grouping
/// values, fields with no numeric values) are not errors — they resolve to
/// documented fallback values instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid summary format: expected `target,orientation,grouping,field[,field...]`")]
    MalformedSpec,
    #[error("invalid field definition {segment:?}: must be `name:displayName:measure`")]
    MalformedFieldSpec { segment: String },
    #[error("invalid measure type for field {field:?}")]
    InvalidMeasure { field: String },
    #[error("invalid combined input: expected `summary{delimiter}options`")]
    MissingSegment { delimiter: String },
}

/// Failures of a whole summarization call.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error("parse xml: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}
