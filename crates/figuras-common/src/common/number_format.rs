//! Text form of computed results.
//!
//! Uses the classic `double` printing rules: plain decimals with at least
//! one fractional digit between 1e-3 and 1e7, upper-case scientific notation outside that range.

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug output is the shortest round-trip form and keeps a trailing ".0".
        return format!("{value:?}");
    }

    scientific(value)
}

fn scientific(value: f64) -> String {
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
