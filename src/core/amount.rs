//! Betrag-Satz-* amount normalization.
//!
//! Registers print amounts with a decimal comma (`13,80`). Some registers
//! in the field also emit thousands separators or otherwise doubled
//! separators; those are collapsed so that only the last separator
//! survives as the decimal point.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Significant digits a [`Decimal`] can hold.
const MAX_PRECISION: usize = 28;

/// Normalize a raw amount token into a [`Decimal`].
///
/// 1. every `,` becomes `.`
/// 2. every `.` except the last one is deleted
/// 3. the longest leading numeric literal is parsed, including an
///    optional `e` exponent, the way C `strtod` reads it
///
/// Input that yields no digits at all is treated as zero instead of an
/// error. This leniency is kept for compatibility with malformed codes
/// seen from real registers; note that it also hides genuinely broken
/// tokens, which is why a warning is emitted.
///
/// Step 2 means `1.234,56` reads as `1234.56`, but so does `1.234.56`.
/// Whether the collapse was ever meant for thousands separators is
/// unclear; the behavior is kept as observed.
///
/// Literals outside the range of [`Decimal`] saturate at its bounds
/// instead of reading as zero.
pub fn normalize_amount(raw: &str) -> Decimal {
    let dotted = raw.replace(',', ".");
    let collapsed = collapse_separators(&dotted);

    match leading_decimal(&collapsed) {
        Some(value) => value,
        None => {
            warn!(raw, "unparsable amount token, falling back to zero");
            Decimal::ZERO
        }
    }
}

/// Remove every `.` that is not the last `.` in `s`.
fn collapse_separators(s: &str) -> String {
    match s.rfind('.') {
        Some(last) => s
            .char_indices()
            .filter(|&(i, c)| c != '.' || i == last)
            .map(|(_, c)| c)
            .collect(),
        None => s.to_string(),
    }
}

/// Parse the longest `[ws][+-]digits[.digits][e[+-]digits]` prefix of `s`.
///
/// Leading whitespace is the ASCII set skipped by C `strtod`. Literals
/// beyond the range of [`Decimal`] saturate at `Decimal::MAX`/`MIN`.
fn leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim_start_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = s.as_bytes();

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    pos = skip_digits(bytes, pos);
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        pos = skip_digits(bytes, frac_start);
        frac_part = &s[frac_start..pos];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    // Digits past Decimal's precision are dropped rather than rounded.
    let keep = frac_part
        .len()
        .min(MAX_PRECISION.saturating_sub(int_part.len()));
    let frac_part = &frac_part[..keep];
    let literal = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    // Digits only, so the sole failure mode is overflow.
    let mantissa = match Decimal::from_str(&literal) {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => return Some(saturated(negative, s)),
    };

    Some(match exponent_at(bytes, pos) {
        Some(exponent) => apply_exponent(mantissa, exponent, negative, s),
        None => mantissa,
    })
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Read an `e[+-]digits` exponent at `pos`. A bare `e` is not an exponent.
fn exponent_at(bytes: &[u8], pos: usize) -> Option<i64> {
    if !matches!(bytes.get(pos), Some(b'e' | b'E')) {
        return None;
    }
    let mut start = pos + 1;
    let negative = match bytes.get(start) {
        Some(b'-') => {
            start += 1;
            true
        }
        Some(b'+') => {
            start += 1;
            false
        }
        _ => false,
    };
    let end = skip_digits(bytes, start);
    if end == start {
        return None;
    }

    let magnitude = bytes[start..end].iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Scale `mantissa` by `10^exponent`, saturating on overflow.
fn apply_exponent(mantissa: Decimal, exponent: i64, negative: bool, s: &str) -> Decimal {
    // Past this many steps any non-zero mantissa has over- or underflowed.
    const MAX_STEPS: u64 = 64;

    let steps = exponent.unsigned_abs().min(MAX_STEPS);
    let mut value = mantissa;
    for _ in 0..steps {
        value = if exponent > 0 {
            match value.checked_mul(Decimal::TEN) {
                Some(v) => v,
                None => return saturated(negative, s),
            }
        } else {
            value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        };
    }
    value
}

fn saturated(negative: bool, s: &str) -> Decimal {
    warn!(raw = s, "amount token out of range, saturating");
    if negative { Decimal::MIN } else { Decimal::MAX }
}
