use crate::locale::{format_grouped, NumberLocale};

/// Display information for one ISO 4217 currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Fraction digits conventionally shown for this currency.
    pub decimals: u32,
}

pub static USD: Currency = Currency { code: "USD", symbol: "$", decimals: 2 };
pub static EUR: Currency = Currency { code: "EUR", symbol: "€", decimals: 2 };
pub static GBP: Currency = Currency { code: "GBP", symbol: "£", decimals: 2 };
/// Yen amounts are whole numbers; no minor unit in circulation.
pub static JPY: Currency = Currency { code: "JPY", symbol: "¥", decimals: 0 };
pub static CNY: Currency = Currency { code: "CNY", symbol: "CN¥", decimals: 2 };
pub static CAD: Currency = Currency { code: "CAD", symbol: "CA$", decimals: 2 };
pub static AUD: Currency = Currency { code: "AUD", symbol: "A$", decimals: 2 };
pub static CHF: Currency = Currency { code: "CHF", symbol: "CHF", decimals: 2 };
pub static BRL: Currency = Currency { code: "BRL", symbol: "R$", decimals: 2 };
pub static MXN: Currency = Currency { code: "MXN", symbol: "MX$", decimals: 2 };
pub static DOP: Currency = Currency { code: "DOP", symbol: "RD$", decimals: 2 };
pub static INR: Currency = Currency { code: "INR", symbol: "₹", decimals: 2 };
pub static KRW: Currency = Currency { code: "KRW", symbol: "₩", decimals: 0 };

/// Look up a built-in currency by ISO code (case-insensitive, trimmed).
pub fn get_currency(code: &str) -> Option<&'static Currency> {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => Some(&USD),
        "EUR" => Some(&EUR),
        "GBP" => Some(&GBP),
        "JPY" => Some(&JPY),
        "CNY" => Some(&CNY),
        "CAD" => Some(&CAD),
        "AUD" => Some(&AUD),
        "CHF" => Some(&CHF),
        "BRL" => Some(&BRL),
        "MXN" => Some(&MXN),
        "DOP" => Some(&DOP),
        "INR" => Some(&INR),
        "KRW" => Some(&KRW),
        _ => None,
    }
}

/// Render `value` as currency in the given ISO code.
///
/// Known codes use their registered symbol and fraction digits. Unknown codes
/// render best-effort with the uppercased code as prefix and two fraction
/// digits (`XYZ 1,234.50`) rather than failing: currency display is a
/// presentation concern, not a validation layer.
pub fn format_currency(value: f64, code: &str, locale: &NumberLocale) -> String {
    match get_currency(code) {
        Some(currency) => render(value, currency.symbol, currency.decimals, locale),
        None => {
            let prefix = code.trim().to_ascii_uppercase();
            render(value, &prefix, 2, locale)
        }
    }
}

fn render(value: f64, symbol: &str, decimals: u32, locale: &NumberLocale) -> String {
    let (sign, magnitude) = if value < 0.0 { ("-", -value) } else { ("", value) };
    let number = format_grouped(magnitude, decimals, locale);
    // Alphabetic symbols (CHF, unknown ISO codes) read as words and take a
    // separating space; glyph symbols attach directly.
    if !symbol.is_empty() && symbol.chars().all(|c| c.is_alphabetic()) {
        format!("{sign}{symbol} {number}")
    } else {
        format!("{sign}{symbol}{number}")
    }
}
