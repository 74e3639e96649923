//! Numeric-string detection.
//!
//! A single picture argument like `"123"` names a user while `"large"` names
//! a picture type. The boundary is the classic loose numeric test: optional
//! surrounding whitespace, optional sign, decimal digits with an optional
//! fraction, and an optional exponent. Hex, binary and empty strings are
//! not numeric.

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Whether `s` reads as a decimal number.
pub fn is_numeric(s: &str) -> bool {
    let body = s.trim_start_matches(is_space).trim_end_matches(is_space);
    let bytes = body.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
