/// Number of significant digits printed when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Most significant digits printed. Enough to tell any two `f64` apart.
pub const MAX_PRECISION: usize = 17;

/// Formats a value with `precision` significant digits in general notation.
///
/// The value is rounded to `precision` significant digits, clamped to
/// `1..=MAX_PRECISION`.
/// Fixed notation is used when the decimal exponent of the rounded value lies
/// in `-4..precision`, scientific notation otherwise. Trailing fractional
/// zeros are removed, and scientific exponents carry a sign and at least two
/// digits.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `precision`: Significant digits to keep.
///
/// ## Returns
/// The formatted number.
///
/// ## Example
/// ```
/// use reckon::util::num::format_general;
///
/// assert_eq!(format_general(11.0, 6), "11");
/// assert_eq!(format_general(10.0 / 3.0, 6), "3.33333");
/// assert_eq!(format_general(1_000_000.0, 6), "1e+06");
/// assert_eq!(format_general(0.000_125, 6), "0.000125");
/// assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
/// assert_eq!(format_general(-1234.5678, 3), "-1.23e+03");
/// assert_eq!(format_general(0.001, usize::MAX), "0.001");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.clamp(1, MAX_PRECISION);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let limit = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}",
                       strip_trailing_zeros(mantissa),
                       exponent.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or_default();
    strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing is left behind it.
///
/// ## Example
/// ```
/// use reckon::util::num::strip_trailing_zeros;
///
/// assert_eq!(strip_trailing_zeros("1.2500"), "1.25");
/// assert_eq!(strip_trailing_zeros("3.000"), "3");
/// assert_eq!(strip_trailing_zeros("100"), "100");
/// ```
#[must_use]
pub fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
