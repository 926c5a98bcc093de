// Shared numeric conversion helpers used by the array generics

use num_traits::ToPrimitive;

const TWO_32: f64 = 2_i64.pow(32) as f64; // 2^32

/// JS ToUint32 semantics for Number inputs (`n >>> 0`)
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0_u32;
    }
    let int = n.trunc();
    let u = ((int % TWO_32) + TWO_32) % TWO_32;
    u.to_u32().unwrap_or(0)
}

/// ES5 ToInteger on an already converted number.
///
/// NaN becomes 0; zeros and infinities pass through untouched so range
/// resolution can clamp them; everything else truncates toward zero.
pub fn to_integer(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else if n == 0.0 || n.is_infinite() {
        n
    } else {
        n.signum() * n.abs().floor()
    }
}

/// ECMAScript whitespace characters (broader than Rust's `.trim()`).
fn is_es_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{00A0}' | '\u{1680}' | '\u{2000}'
            ..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Trim ECMAScript whitespace from both ends of a string.
pub(crate) fn es_trim(s: &str) -> &str {
    s.trim_matches(is_es_whitespace)
}

/// ToNumber applied to a String (StringNumericLiteral grammar).
pub fn string_to_number(s: &str) -> f64 {
    let s = es_trim(s);
    if s.is_empty() {
        return 0.0;
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() {
            return f64::NAN;
        }
        return hex
            .chars()
            .try_fold(0.0_f64, |acc, c| c.to_digit(16).map(|d| acc * 16.0 + d as f64))
            .unwrap_or(f64::NAN);
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    // Rust's float parser also accepts "inf", "nan" and friends; only let
    // decimal literal characters through.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || !unsigned.bytes().any(|b| b.is_ascii_digit())
        || !unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }
    match unsigned.parse::<f64>() {
        Ok(n) => sign * n,
        Err(_) => f64::NAN,
    }
}

/// ToString applied to a Number.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }
    // Exponent form: Rust prints "1e21", JS prints "1e+21".
    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
