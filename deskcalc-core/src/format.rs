//! Display formatting for evaluator results.

/// Text shown in the display when an operation fails (zero divisor).
pub const ERROR_TEXT: &str = "Error";

/// Render a result for the display.
///
/// Uses the default decimal form of the value and strips a trailing `".0"`
/// fractional suffix so integral results show without a decimal point.
/// No rounding or significant-digit truncation beyond that: repeated
/// division artifacts like `0.30000000000000004` display verbatim.
pub fn format_result(n: f64) -> String {
    let s = n.to_string();
    match s.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => s,
    }
}
