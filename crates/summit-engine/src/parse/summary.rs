use crate::error::SpecError;
use crate::model::{FieldSpec, Measure, Orientation, SummaryRequest};

/// Parse a summary specification string into a [`SummaryRequest`].
///
/// Grammar (comma-separated segments, colon-separated sub-segments):
///
/// ```text
/// targetNode,orientation,groupingField:groupingName,name:displayName:measure[,...]
/// ```
///
/// Example: `"Item,1,Category:Group,Price:Total Price:1,Qty:Count:2"`.
///
/// Whitespace around every segment and sub-segment is trimmed. The
/// orientation code is not validated; unrecognized values survive as
/// [`Orientation::Other`].
pub fn parse_summary(input: &str) -> Result<SummaryRequest, SpecError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() < 4 {
        return Err(SpecError::MalformedSpec);
    }

    let target_node = parts[0].to_string();
    let orientation = Orientation::from_code(parts[1].parse().unwrap_or(0));
    let (grouping_field, grouping_display_name) = parse_grouping(parts[2]);

    let mut fields = Vec::with_capacity(parts.len() - 3);
    for segment in &parts[3..] {
        fields.push(parse_field(segment)?);
    }

    Ok(SummaryRequest {
        target_node,
        orientation,
        grouping_field,
        grouping_display_name,
        fields,
    })
}

fn parse_grouping(segment: &str) -> (Option<String>, Option<String>) {
    let mut halves = segment.splitn(2, ':').map(str::trim);
    let field = halves
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let display = halves
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    (field, display)
}

fn parse_field(segment: &str) -> Result<FieldSpec, SpecError> {
    let parts: Vec<&str> = segment.split(':').map(str::trim).collect();
    let (name, display_name, measure_code) = match parts.as_slice() {
        [name, display, code, ..]
            if !name.is_empty() && !display.is_empty() && !code.is_empty() =>
        {
            (*name, *display, *code)
        }
        _ => {
            return Err(SpecError::MalformedFieldSpec {
                segment: segment.to_string(),
            })
        }
    };

    let code: i32 = measure_code.parse().map_err(|_| SpecError::InvalidMeasure {
        field: name.to_string(),
    })?;

    Ok(FieldSpec {
        name: name.to_string(),
        display_name: display_name.to_string(),
        measure: Measure::from_code(code),
    })
}
