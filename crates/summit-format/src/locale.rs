/// Minimal locale information used for plain-number rendering.
///
/// `NumberLocale` only carries the decimal/thousands separators the summary
/// engine needs; it does not attempt to model full CLDR number patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub id: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

pub static EN_US: NumberLocale = NumberLocale {
    id: "en-US",
    decimal_separator: '.',
    thousands_separator: Some(','),
};

/// Spanish (Dominican Republic) — the default output locale of the summary
/// engine. Same separators as `en-US`.
pub static ES_DO: NumberLocale = NumberLocale {
    id: "es-DO",
    decimal_separator: '.',
    thousands_separator: Some(','),
};

pub static DE_DE: NumberLocale = NumberLocale {
    id: "de-DE",
    decimal_separator: ',',
    thousands_separator: Some('.'),
};

/// Format a number with a fixed count of fraction digits and locale-specific
/// separators.
///
/// The value is rounded half away from zero to `decimals` digits before
/// rendering; non-finite values are passed through via `f64`'s `Display`.
pub fn format_grouped(value: f64, decimals: u32, locale: &NumberLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut rounded = crate::round_to(value, decimals);
    // Avoid displaying negative zero (can show up after rounding -0.2 to 0 digits).
    if rounded == 0.0 {
        rounded = 0.0;
    }

    let s = format!("{:.*}", decimals as usize, rounded);
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let grouped_int = match locale.thousands_separator {
        Some(sep) => group_thousands(int_part, sep),
        None => int_part.to_string(),
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped_int}")
    } else {
        format!("{sign}{grouped_int}{}{frac_part}", locale.decimal_separator)
    }
}

/// Format a number as a locale-grouped integer (zero fraction digits).
pub fn format_integer(value: f64, locale: &NumberLocale) -> String {
    format_grouped(value, 0, locale)
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(sep);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}
