//! Display formatting for numeric results.
//!
//! Output follows the conventions of ECMAScript number formatting so that
//! the strings written back into the operand are portable: plain decimals,
//! `1.234560e+12` exponential form, and `toPrecision`-style significant
//! digit rendering.

/// Longest operand, in characters, the engine keeps.
pub const MAX_DISPLAY_LEN: usize = 12;

/// Magnitude from which results are shown in exponential notation.
pub const EXPONENTIAL_THRESHOLD: f64 = 1e12;

const EXPONENTIAL_DIGITS: usize = 6;
const SIGNIFICANT_DIGITS: usize = 8;

/// Render a number for display.
///
/// - `|value| >= 1e12`: exponential notation with 6 fractional digits
/// - plain decimal longer than 12 characters: 8 significant digits
/// - otherwise: the plain decimal as is
///
/// # Example
///
/// ```rust
/// use reckon::core::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(2e12), "2.000000e+12");
/// assert_eq!(format_number(123456789.12345678), "1.2345679e+8");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return plain_decimal(value);
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return to_exponential(value, EXPONENTIAL_DIGITS);
    }

    let plain = plain_decimal(value);
    if plain.chars().count() > MAX_DISPLAY_LEN {
        to_precision(value, SIGNIFICANT_DIGITS)
    } else {
        plain
    }
}

/// Shortest round-tripping decimal representation.
///
/// Negative zero prints as `0` and magnitudes below `1e-6` switch to
/// exponential form, matching ECMAScript `String(number)`.
pub fn plain_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < 1e-6 {
        return with_signed_exponent(&format!("{value:e}"));
    }
    format!("{value}")
}

fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let (digits, exponent) = significant_digits(value, fraction_digits + 1);
    let mantissa = match digits.split_at(1) {
        (lead, "") => lead.to_string(),
        (lead, rest) => format!("{lead}.{rest}"),
    };
    let sign = if exponent < 0 { "-" } else { "+" };
    format!("{}{mantissa}e{sign}{}", sign_of(value), exponent.abs())
}

fn to_precision(value: f64, significant: usize) -> String {
    let (digits, exponent) = significant_digits(value, significant);
    if exponent < -6 || exponent >= significant as i32 {
        return to_exponential(value, significant - 1);
    }

    let body = if exponent < 0 {
        format!("0.{}{digits}", "0".repeat((-exponent - 1) as usize))
    } else {
        match digits.split_at(exponent as usize + 1) {
            (whole, "") => whole.to_string(),
            (whole, fraction) => format!("{whole}.{fraction}"),
        }
    };
    format!("{}{body}", sign_of(value))
}

fn sign_of(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else {
        ""
    }
}

/// The first `count` significant digits of `|value|` and the decimal
/// exponent of the leading one.
///
/// Exact ties round away from zero, the way ECMAScript picks the larger
/// candidate. Rust's own `{:.N}` formatting resolves ties to even.
fn significant_digits(value: f64, count: usize) -> (String, i32) {
    // Extra digits past the cut are exact enough to tell a tie apart: an
    // f64 cannot sit within 1e-40 of a decimal tie without being one.
    let exact = format!("{:.*e}", count + 40, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept: Vec<u8> = all.iter().copied().take(count).collect();

    if all.get(count).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.truncate(count);
            exponent += 1;
        }
    }

    (kept.into_iter().map(char::from).collect(), exponent)
}

// Rust writes `1.5e12`; ECMAScript writes `1.5e+12`.
fn with_signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted.to_string(),
    }
}
