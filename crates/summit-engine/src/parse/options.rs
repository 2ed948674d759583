use crate::model::FormatOptions;

/// Parse a compact key-value options string into [`FormatOptions`].
///
/// Every option has a short two-letter key and an equivalent long camelCase
/// key; one schema, two spellings:
///
/// | short | long                 | value                          |
/// |-------|----------------------|--------------------------------|
/// | `rd`  | `roundDecimals`      | integer                        |
/// | `cu`  | `currency`           | ISO code                       |
/// | `sc`  | `showCurrencySymbol` | `1` = true                     |
/// | `as`  | `asJson`             | `1` = true                     |
/// | `tm`  | `treatMissingAsZero` | `1` = true                     |
/// | `sr`  | `sortResults`        | `1` = true                     |
/// | `pf`  | `percentageFields`   | `\|`-separated display names   |
/// | `if`  | `integerFields`      | `\|`-separated source names    |
///
/// Parsing is permissive by design: parts without a key or value are
/// skipped, unknown keys are ignored, and boolean keys treat anything but
/// the literal `"1"` as false. This never fails.
pub fn parse_options(input: &str) -> FormatOptions {
    let mut options = FormatOptions::default();

    for part in input.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key {
            "rd" | "roundDecimals" => {
                if let Ok(decimals) = value.parse() {
                    options.round_decimals = Some(decimals);
                }
            }
            "cu" | "currency" => options.currency = Some(value.to_string()),
            "sc" | "showCurrencySymbol" => options.show_currency_symbol = Some(value == "1"),
            "as" | "asJson" => options.as_json = Some(value == "1"),
            "tm" | "treatMissingAsZero" => options.treat_missing_as_zero = Some(value == "1"),
            "sr" | "sortResults" => options.sort_results = Some(value == "1"),
            "pf" | "percentageFields" => options.percentage_fields = Some(split_list(value)),
            "if" | "integerFields" => options.integer_fields = Some(split_list(value)),
            _ => {}
        }
    }

    options
}

fn split_list(value: &str) -> Vec<String> {
    value.split('|').map(|entry| entry.trim().to_string()).collect()
}
