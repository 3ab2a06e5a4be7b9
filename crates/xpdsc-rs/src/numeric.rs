// crates/xpdsc-rs/src/numeric.rs

//! Relaxed string-to-number coercion for attribute values.
//!
//! `.pdsc` files in the wild carry numeric attributes such as `"72000000"`,
//! `"12MHz"` or `"0.5"`. Instead of rejecting what does not parse, the
//! conversion keeps a number that may be "not a number", and the JSON output
//! renders that as `null`.

use serde::{Serialize, Serializer};

/// Largest integer that survives a round trip through `f64` unchanged.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A number produced by relaxed parsing; may be NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LooseNumber(f64);

impl LooseNumber {
    pub const NAN: LooseNumber = LooseNumber(f64::NAN);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The value as an integer, if it is finite and has no fractional part.
    pub fn as_i64(self) -> Option<i64> {
        let v = self.0;
        if v.is_finite() && v.abs() <= MAX_SAFE_INTEGER && v == (v as i64) as f64 {
            Some(v as i64)
        } else {
            None
        }
    }
}

impl From<i64> for LooseNumber {
    fn from(v: i64) -> Self {
        LooseNumber(v as f64)
    }
}

impl From<f64> for LooseNumber {
    fn from(v: f64) -> Self {
        LooseNumber(v)
    }
}

impl Serialize for LooseNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(i) = self.as_i64() {
            serializer.serialize_i64(i)
        } else if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Parses the leading base-10 integer of `s`.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit and trailing content is ignored. No digits at all yields NaN.
pub fn parse_int_loose(s: &str) -> LooseNumber {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return LooseNumber::NAN;
    }

    // An all-digit slice always parses; the conversion is correctly rounded.
    let magnitude = rest[..digits_len].parse::<f64>().unwrap_or(f64::NAN);
    LooseNumber(if negative { -magnitude } else { magnitude })
}

/// Parses the whole of `s` as a number.
///
/// Accepts surrounding whitespace, decimal and exponent notation,
/// `0x`/`0o`/`0b` prefixed integers and `Infinity`. An empty string is 0;
/// anything else that is not entirely numeric is NaN.
pub fn parse_number_loose(s: &str) -> LooseNumber {
    let s = s.trim();
    if s.is_empty() {
        return LooseNumber(0.0);
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    match s {
        "Infinity" | "+Infinity" => return LooseNumber(f64::INFINITY),
        "-Infinity" => return LooseNumber(f64::NEG_INFINITY),
        _ => {}
    }

    // `f64::from_str` also accepts words like "inf" and "nan"; only plain
    // numeric literals are numbers here.
    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return LooseNumber::NAN;
    }
    s.parse::<f64>().map(LooseNumber).unwrap_or(LooseNumber::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> LooseNumber {
    if digits.is_empty() {
        return LooseNumber::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return LooseNumber::NAN,
        }
    }
    LooseNumber(acc)
}
