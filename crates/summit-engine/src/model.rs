use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistical reduction applied to a field's numeric values within a group.
///
/// Codes 1-6 come from the spec grammar; anything else is carried as
/// [`Measure::Unknown`] and resolves to the literal `"N/A"` at output time.
/// Unknown codes are not a parse error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    Sum,
    Count,
    Min,
    Max,
    Average,
    StdDev,
    Unknown(i32),
}

impl Measure {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Measure::Sum,
            2 => Measure::Count,
            3 => Measure::Min,
            4 => Measure::Max,
            5 => Measure::Average,
            6 => Measure::StdDev,
            other => Measure::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Measure::Sum => 1,
            Measure::Count => 2,
            Measure::Min => 3,
            Measure::Max => 4,
            Measure::Average => 5,
            Measure::StdDev => 6,
            Measure::Unknown(code) => code,
        }
    }
}

/// Output orientation carried through as metadata; it does not alter
/// aggregation. The grammar does not validate the code, so unrecognized
/// values survive as [`Orientation::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Other(i32),
}

impl Orientation {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Orientation::Horizontal,
            2 => Orientation::Vertical,
            other => Orientation::Other(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => 2,
            Orientation::Other(code) => code,
        }
    }
}

/// One field aggregation request: a descendant selector evaluated relative
/// to each target node, an output label, and the measure to compute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub display_name: String,
    pub measure: Measure,
}

/// A parsed summary specification.
///
/// `grouping_field` of `"*"` is a sentinel meaning "no grouping": every
/// target node collapses into a single group named by
/// `grouping_display_name` (default `"Ungrouped"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub target_node: String,
    pub orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_display_name: Option<String>,
    pub fields: Vec<FieldSpec>,
}

impl SummaryRequest {
    /// Renders the request back into the compact spec grammar.
    ///
    /// Parsing the result yields a structurally equal request.
    pub fn to_spec_string(&self) -> String {
        let grouping = match (&self.grouping_field, &self.grouping_display_name) {
            (Some(field), Some(display)) => format!("{field}:{display}"),
            (Some(field), None) => field.clone(),
            (None, Some(display)) => format!(":{display}"),
            (None, None) => String::new(),
        };

        let mut out = format!(
            "{},{},{}",
            self.target_node,
            self.orientation.code(),
            grouping
        );
        for field in &self.fields {
            out.push_str(&format!(
                ",{}:{}:{}",
                field.name,
                field.display_name,
                field.measure.code()
            ));
        }
        out
    }
}

/// Output formatting configuration.
///
/// Every field is optional; absence means "no transformation of that kind".
/// `treat_missing_as_zero` defaults to `true` in the engine when the key is
/// absent (the parser records only what the input said).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_decimals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_currency_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_json: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_as_zero: Option<bool>,
    /// Display names whose rendered value gets a literal `%` suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_fields: Option<Vec<String>>,
    /// Source names rendered as locale-grouped integers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_fields: Option<Vec<String>>,
    /// Accepted by the grammar; no ordering contract is defined yet, so the
    /// engine ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_results: Option<bool>,
}

/// A finalized, formatted measure value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AggregatedValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AggregatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregatedValue::Number(n) => write!(f, "{n}"),
            AggregatedValue::Text(t) => f.write_str(t),
        }
    }
}

/// One labeled output value inside a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedField {
    pub name: String,
    pub value: AggregatedValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_codes_round_trip() {
        for code in -2..9 {
            assert_eq!(Measure::from_code(code).code(), code);
        }
        assert_eq!(Measure::from_code(1), Measure::Sum);
        assert_eq!(Measure::from_code(6), Measure::StdDev);
        assert_eq!(Measure::from_code(7), Measure::Unknown(7));
    }

    #[test]
    fn orientation_codes_round_trip() {
        assert_eq!(Orientation::from_code(1), Orientation::Horizontal);
        assert_eq!(Orientation::from_code(2), Orientation::Vertical);
        assert_eq!(Orientation::from_code(0), Orientation::Other(0));
        assert_eq!(Orientation::Other(9).code(), 9);
    }

    #[test]
    fn aggregated_value_serializes_untagged() {
        let json = serde_json::to_string(&AggregatedField {
            name: "Total".to_string(),
            value: AggregatedValue::Number(300.0),
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"Total","value":300.0}"#);

        let json = serde_json::to_string(&AggregatedValue::Text("N/A".to_string())).unwrap();
        assert_eq!(json, r#""N/A""#);
    }

    #[test]
    fn spec_string_rendering_covers_partial_grouping_segments() {
        let mut request = SummaryRequest {
            target_node: "Item".to_string(),
            orientation: Orientation::Horizontal,
            grouping_field: Some("Category".to_string()),
            grouping_display_name: Some("Group".to_string()),
            fields: vec![FieldSpec {
                name: "Price".to_string(),
                display_name: "Total".to_string(),
                measure: Measure::Sum,
            }],
        };
        assert_eq!(request.to_spec_string(), "Item,1,Category:Group,Price:Total:1");

        request.grouping_display_name = None;
        assert_eq!(request.to_spec_string(), "Item,1,Category,Price:Total:1");

        request.grouping_field = None;
        request.grouping_display_name = Some("Totals".to_string());
        assert_eq!(request.to_spec_string(), "Item,1,:Totals,Price:Total:1");
    }
}
