//! Numeric string recognition.

use std::cmp::Ordering;

/// Number is the numeric reading of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Numeric equality; integers are compared exactly.
    pub fn num_eq(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    /// Total order by numeric value. Integers are compared exactly, also
    /// against floats.
    pub fn num_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Int(a), Number::Float(b)) => int_float_cmp(a, b),
            (Number::Float(a), Number::Int(b)) => int_float_cmp(b, a).reverse(),
            (Number::Float(a), Number::Float(b)) => a.total_cmp(&b),
        }
    }
}

/// 2^63, the first float above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn int_float_cmp(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    } else if f >= I64_BOUND {
        Ordering::Less
    } else if f < -I64_BOUND {
        Ordering::Greater
    } else if f.fract() == 0.0 {
        i128::from(i).cmp(&(f as i128))
    } else {
        // Non-integral floats lie strictly below 2^53, where the conversion
        // of `i` cannot cross them.
        (i as f64).total_cmp(&f)
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Parses a numeric string.
///
/// Accepted: optional surrounding whitespace, an optional sign, then digits
/// with an optional fraction (`1`, `1.`, `1.5`, `.5`), then an optional
/// exponent (`1e3`, `2.5E-2`). `inf`, `nan`, hex and empty strings are not
/// numeric. Integers that overflow `i64` are read as floats.
pub fn parse_numeric(s: &str) -> Option<Number> {
    let text = s.trim_matches(is_space);
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    let mut is_float = false;
    if pos < bytes.len() && bytes[pos] == b'.' {
        is_float = true;
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        is_float = true;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return None;
        }
    }

    if pos != bytes.len() {
        return None;
    }

    if !is_float {
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }
    text.parse::<f64>().ok().map(Number::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(parse_numeric("0"), Some(Number::Int(0)));
        assert_eq!(parse_numeric("-12"), Some(Number::Int(-12)));
        assert_eq!(parse_numeric("+7"), Some(Number::Int(7)));
        assert_eq!(parse_numeric(" 42 "), Some(Number::Int(42)));
        assert_eq!(parse_numeric("007"), Some(Number::Int(7)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_numeric("0.345"), Some(Number::Float(0.345)));
        assert_eq!(parse_numeric(".5"), Some(Number::Float(0.5)));
        assert_eq!(parse_numeric("1."), Some(Number::Float(1.0)));
        assert_eq!(parse_numeric("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(parse_numeric("2.5E-1"), Some(Number::Float(0.25)));
        assert_eq!(
            parse_numeric("99999999999999999999"),
            Some(Number::Float(1e20))
        );
    }

    #[test]
    fn test_not_numeric() {
        for text in ["", " ", ".", "-", "abc", "1a", "0x1A", "1e", "inf", "NaN", "1 2", "e5"] {
            assert_eq!(parse_numeric(text), None, "{:?}", text);
        }
    }

    #[test]
    fn test_num_eq() {
        assert!(Number::Int(1).num_eq(Number::Float(1.0)));
        assert!(!Number::Int(1).num_eq(Number::Int(2)));
        assert!(!Number::Float(f64::NAN).num_eq(Number::Float(f64::NAN)));
    }

    #[test]
    fn test_num_cmp_is_exact_beyond_float_precision() {
        let above = Number::Int((1 << 53) + 1);
        let float = Number::Float(9_007_199_254_740_992.0);
        assert_eq!(above.num_cmp(float), Ordering::Greater);
        assert_eq!(float.num_cmp(above), Ordering::Less);
        assert_eq!(Number::Int(1 << 53).num_cmp(float), Ordering::Equal);
        assert_eq!(Number::Int(i64::MAX).num_cmp(Number::Float(9.223372036854775807e18)), Ordering::Less);
        assert_eq!(Number::Int(i64::MIN).num_cmp(Number::Float(-1e19)), Ordering::Greater);
        assert_eq!(Number::Int(2).num_cmp(Number::Float(2.5)), Ordering::Less);
        assert_eq!(Number::Int(-3).num_cmp(Number::Float(-3.5)), Ordering::Greater);
        assert_eq!(Number::Int(0).num_cmp(Number::Float(f64::NAN)), Ordering::Less);
    }
}
