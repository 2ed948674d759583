use summit_format::{format_currency, format_integer, round_to, NumberLocale, ES_DO};

use crate::model::{AggregatedValue, FieldSpec, FormatOptions};

/// Separator conventions for rendered output (`,` grouping, `.` decimal).
static OUTPUT_LOCALE: &NumberLocale = &ES_DO;

/// Apply output formatting to a resolved measure value.
///
/// Numeric branches are mutually exclusive and first-match-wins:
/// 1. the field's *source name* in `integer_fields` → locale-grouped
///    integer string;
/// 2. `currency` set → currency rendering, with every character other
///    than digits, `,` and `.` stripped unless `show_currency_symbol`;
/// 3. `round_decimals` set → rounded, still numeric;
/// 4. otherwise the raw number passes through.
///
/// Independently of those, a field whose *display name* is in
/// `percentage_fields` gets a literal `%` suffix, coercing the result to
/// text.
pub(crate) fn format_value(
    value: AggregatedValue,
    field: &FieldSpec,
    options: &FormatOptions,
) -> AggregatedValue {
    let mut result = match value {
        AggregatedValue::Number(n) => format_number(n, field, options),
        text => text,
    };

    if list_contains(&options.percentage_fields, &field.display_name) {
        result = AggregatedValue::Text(format!("{result}%"));
    }

    result
}

fn format_number(n: f64, field: &FieldSpec, options: &FormatOptions) -> AggregatedValue {
    if list_contains(&options.integer_fields, &field.name) {
        AggregatedValue::Text(format_integer(n, OUTPUT_LOCALE))
    } else if let Some(code) = options.currency.as_deref() {
        let rendered = format_currency(n, code, OUTPUT_LOCALE);
        if options.show_currency_symbol == Some(true) {
            AggregatedValue::Text(rendered)
        } else {
            AggregatedValue::Text(
                rendered
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
                    .collect(),
            )
        }
    } else if let Some(decimals) = options.round_decimals {
        AggregatedValue::Number(round_to(n, decimals))
    } else {
        AggregatedValue::Number(n)
    }
}

fn list_contains(list: &Option<Vec<String>>, needle: &str) -> bool {
    list.as_ref()
        .is_some_and(|entries| entries.iter().any(|entry| entry == needle))
}
