//! The aggregation engine.
//!
//! One synchronous pass over matched target nodes, then a finalize pass
//! that resolves each requested measure from its accumulator and formats
//! it. All accumulator state is owned by the call frame; concurrent calls
//! never share anything.

use std::collections::HashMap;

use roxmltree::Document;

use crate::error::SummaryError;
use crate::format::format_value;
use crate::map::SummaryMap;
use crate::model::{AggregatedField, AggregatedValue, FormatOptions, Measure, SummaryRequest};
use crate::parse::{parse_combined, parse_summary, DEFAULT_DELIMITER};
use crate::stats::FieldStats;
use crate::xml;

/// Grouping-field sentinel: collapse every target node into one group.
const COLLAPSE_ALL: &str = "*";
/// Group key for nodes whose grouping field is absent or empty, and the
/// output literal for measures with nothing to report.
const NOT_APPLICABLE: &str = "N/A";
/// Default name of the collapsed group when no display name was given.
const UNGROUPED: &str = "Ungrouped";

/// Result of a summarization call: the grouped mapping, or its JSON text
/// form when the `asJson` option is set.
#[derive(Clone, Debug, PartialEq)]
pub enum SummaryOutput {
    Grouped(SummaryMap),
    Json(String),
}

impl SummaryOutput {
    /// The grouped mapping, if this output was not rendered to JSON.
    pub fn as_grouped(&self) -> Option<&SummaryMap> {
        match self {
            SummaryOutput::Grouped(map) => Some(map),
            SummaryOutput::Json(_) => None,
        }
    }

    /// The JSON text, if the `asJson` option was set.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            SummaryOutput::Grouped(_) => None,
            SummaryOutput::Json(json) => Some(json.as_str()),
        }
    }
}

/// Summarize an XML document with a pre-parsed request.
pub fn summarize(
    xml_text: &str,
    request: &SummaryRequest,
    options: &FormatOptions,
) -> Result<SummaryOutput, SummaryError> {
    let document = Document::parse(xml_text)?;
    let grouped = summarize_document(&document, request, options);

    if options.as_json == Some(true) {
        Ok(SummaryOutput::Json(grouped.to_json(true)?))
    } else {
        Ok(SummaryOutput::Grouped(grouped))
    }
}

/// Summarize an XML document with a summary spec string and programmatic
/// options.
pub fn summarize_spec(
    xml_text: &str,
    spec: &str,
    options: &FormatOptions,
) -> Result<SummaryOutput, SummaryError> {
    let request = parse_summary(spec)?;
    summarize(xml_text, &request, options)
}

/// Summarize an XML document with a combined `summary;options` string.
pub fn summarize_combined(xml_text: &str, combined: &str) -> Result<SummaryOutput, SummaryError> {
    summarize_combined_with(xml_text, combined, DEFAULT_DELIMITER)
}

/// [`summarize_combined`] with a caller-supplied delimiter.
pub fn summarize_combined_with(
    xml_text: &str,
    combined: &str,
    delimiter: &str,
) -> Result<SummaryOutput, SummaryError> {
    let (request, options) = parse_combined(combined, delimiter)?;
    summarize(xml_text, &request, &options)
}

type FieldKey = (String, Measure);

fn summarize_document(
    document: &Document,
    request: &SummaryRequest,
    options: &FormatOptions,
) -> SummaryMap {
    let treat_missing_as_zero = options.treat_missing_as_zero.unwrap_or(true);

    let mut result = SummaryMap::new();
    let mut storage: HashMap<String, HashMap<FieldKey, FieldStats>> = HashMap::new();

    let collapse_all = request.grouping_field.as_deref() == Some(COLLAPSE_ALL);
    let collapsed_key = request
        .grouping_display_name
        .clone()
        .unwrap_or_else(|| UNGROUPED.to_string());

    // The collapsed group exists even when no target node matches.
    if collapse_all {
        result.insert(collapsed_key.clone(), Vec::new());
        storage.entry(collapsed_key.clone()).or_default();
    }

    for target in xml::select_all(document.root(), &request.target_node) {
        let group = if collapse_all {
            collapsed_key.clone()
        } else {
            group_key_for(target, request.grouping_field.as_deref())
        };

        if !result.contains_key(&group) {
            result.insert(group.clone(), Vec::new());
        }
        let group_stats = storage.entry(group).or_default();

        for field in &request.fields {
            let mut values: Vec<f64> = xml::select_all(target, &field.name)
                .into_iter()
                .filter_map(|node| xml::text_content(node).parse().ok())
                .collect();

            if values.is_empty() {
                if !treat_missing_as_zero {
                    // No contribution and no accumulator entry for this node.
                    continue;
                }
                values.push(0.0);
            }

            let stats = group_stats
                .entry((field.name.clone(), field.measure))
                .or_default();
            for value in values {
                stats.record(value);
            }
        }
    }

    // Finalize in group insertion order; fields follow request order, not
    // accumulation order.
    let groups: Vec<String> = result.keys().map(str::to_string).collect();
    for group in groups {
        let Some(group_stats) = storage.get(&group) else {
            continue;
        };

        let mut fields = Vec::new();
        for field in &request.fields {
            let Some(stats) = group_stats.get(&(field.name.clone(), field.measure)) else {
                continue;
            };
            let resolved = resolve_measure(field.measure, stats);
            fields.push(AggregatedField {
                name: field.display_name.clone(),
                value: format_value(resolved, field, options),
            });
        }
        result.insert(group, fields);
    }

    result
}

fn group_key_for(target: roxmltree::Node<'_, '_>, grouping_field: Option<&str>) -> String {
    let Some(field) = grouping_field else {
        return NOT_APPLICABLE.to_string();
    };
    xml::select_first(target, field)
        .map(xml::text_content)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Resolve the requested measure from its accumulator.
///
/// `Min`/`Max` report `"N/A"` while their infinity sentinels are intact
/// (zero observed values), and unknown measure codes resolve to `"N/A"`
/// through an explicit arm — a policy, not an error.
fn resolve_measure(measure: Measure, stats: &FieldStats) -> AggregatedValue {
    match measure {
        Measure::Sum => AggregatedValue::Number(stats.sum),
        Measure::Count => AggregatedValue::Number(stats.count as f64),
        Measure::Average => AggregatedValue::Number(stats.mean()),
        Measure::StdDev => AggregatedValue::Number(stats.population_std_dev()),
        Measure::Min => {
            if stats.min == f64::INFINITY {
                AggregatedValue::Text(NOT_APPLICABLE.to_string())
            } else {
                AggregatedValue::Number(stats.min)
            }
        }
        Measure::Max => {
            if stats.max == f64::NEG_INFINITY {
                AggregatedValue::Text(NOT_APPLICABLE.to_string())
            } else {
                AggregatedValue::Number(stats.max)
            }
        }
        Measure::Unknown(_) => AggregatedValue::Text(NOT_APPLICABLE.to_string()),
    }
}
