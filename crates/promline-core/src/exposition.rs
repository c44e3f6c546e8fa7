//! Text exposition primitives.
//!
//! Escaping and number formatting shared by [`crate::MetricRecord`] rendering.
//! Everything here is pure and allocation-bounded by the input size.
//!
//! Rounding: values are printed with Rust's fixed-point formatter, which
//! rounds the exact binary value of the `f64` half-to-even. `0.125` at two
//! digits is `0.12`, `2.5` at zero digits is `2`. Values such as `2.675`
//! are not ties (their binary value is slightly below) and round down.
//! A value that rounds to zero prints without a sign.

/// Escape a label value: `\` -> `\\`, `"` -> `\"`, newline -> `\n`.
pub fn escape_label_value(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Escape HELP text so it stays on one line. Only newlines are rewritten.
pub fn escape_help(v: &str) -> String {
    v.replace('\n', "\\n")
}

/// Fractional digits past which an `f64`'s decimal expansion is all zeros.
/// The smallest subnormal needs 1074.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format a sample value with exactly `precision` fractional digits.
///
/// Non-finite values use the exposition tokens (`NaN`, `+Inf`, `-Inf`).
/// Any `precision` is accepted; digits beyond the exact expansion are padded.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let shown = precision.min(EXACT_FRACTION_DIGITS);
    let mut out = format!("{value:.shown$}");
    let negative_zero = out
        .strip_prefix('-')
        .is_some_and(|digits| digits.bytes().all(|b| b == b'0' || b == b'.'));
    if negative_zero {
        out.remove(0);
    }
    out.extend(std::iter::repeat('0').take(precision - shown));
    out
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
