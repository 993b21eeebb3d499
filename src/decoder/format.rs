// src/decoder/format.rs

use super::record::{DISPLAY_TEXT_CAP, SI_TEXT_CAP};
use crate::common::labels::Sign;
use arrayvec::ArrayString;
use core::fmt::Write;

/// Joins label strings with single spaces. Capacities are chosen by the
/// callers to fit the full label set, so truncation cannot occur.
pub(crate) fn join_labels<const CAP: usize, I>(parts: I) -> ArrayString<CAP>
where
    I: Iterator<Item = &'static str>,
{
    let mut out = ArrayString::new();
    for part in parts {
        if !out.is_empty() {
            let _ = out.try_push(' ');
        }
        let _ = out.try_push_str(part);
    }
    out
}

/// Display-value cleanup: strip leading zeros (keeping one digit ahead of
/// the point) and a bare trailing ".0", which carries no information on a
/// fixed four-digit display. "OVF" passes through untouched.
pub(crate) fn trim_display_digits(digits: &str) -> &str {
    let mut s = digits;
    while s.len() > 1 && s.as_bytes()[0] == b'0' && s.as_bytes()[1] != b'.' {
        s = &s[1..];
    }
    match s.strip_suffix(".0") {
        Some(head) if !head.is_empty() => head,
        _ => s,
    }
}

/// Formats the as-displayed value: `-123.4 mV`.
///
/// Prefix and unit are the space-joined accumulations; they are
/// concatenated directly so a single prefix reads as `mV`, not `m V`.
pub(crate) fn render_display_text(
    sign: Sign,
    digits: &str,
    prefix_text: &str,
    unit_text: &str,
) -> ArrayString<DISPLAY_TEXT_CAP> {
    let mut out = ArrayString::new();
    if matches!(sign, Sign::Negative) {
        let _ = out.try_push('-');
    }
    let _ = out.try_push_str(trim_display_digits(digits));
    let _ = out.try_push(' ');
    let _ = out.try_push_str(prefix_text);
    let _ = out.try_push_str(unit_text);
    out
}

/// Formats the SI-normalized value in fixed-point notation: `-0.1234 V`.
///
/// `decimals` is the fractional precision the caller derived from the
/// display resolution and the prefix rescale; trailing fractional zeros are
/// trimmed afterwards, keeping one digit after the point. The prefix is
/// omitted since the value is already base-unit-scaled.
pub(crate) fn render_si_text(
    si_value: f64,
    decimals: usize,
    unit_text: &str,
) -> ArrayString<SI_TEXT_CAP> {
    let mut out = ArrayString::new();
    let _ = write!(out, "{:.*}", decimals, si_value);
    trim_fraction_zeros(&mut out);
    let _ = out.try_push(' ');
    let _ = out.try_push_str(unit_text);
    out
}

fn trim_fraction_zeros<const CAP: usize>(s: &mut ArrayString<CAP>) {
    if !s.contains('.') {
        return;
    }
    loop {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && bytes[bytes.len() - 1] == b'0' && bytes[bytes.len() - 2] != b'.' {
            s.pop();
        } else {
            break;
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(trim_display_digits("0123"), "123");
        assert_eq!(trim_display_digits("0050"), "50");
        assert_eq!(trim_display_digits("0.123"), "0.123");
        assert_eq!(trim_display_digits("00.12"), "0.12");
        assert_eq!(trim_display_digits("1234"), "1234");
    }

    #[test]
    fn test_trim_keeps_one_digit() {
        assert_eq!(trim_display_digits("0000"), "0");
    }

    #[test]
    fn test_trim_trailing_point_zero() {
        assert_eq!(trim_display_digits("140.0"), "140");
        assert_eq!(trim_display_digits("0.0"), "0");
        // Only a bare ".0" is dropped, real resolution stays.
        assert_eq!(trim_display_digits("12.30"), "12.30");
        assert_eq!(trim_display_digits("123.4"), "123.4");
    }

    #[test]
    fn test_trim_passes_overflow_marker() {
        assert_eq!(trim_display_digits("OVF"), "OVF");
    }

    #[test]
    fn test_render_display_text() {
        assert_eq!(
            &render_display_text(Sign::Positive, "123.4", "", "V")[..],
            "123.4 V"
        );
        assert_eq!(
            &render_display_text(Sign::Negative, "1.234", "m", "A")[..],
            "-1.234 mA"
        );
        assert_eq!(
            &render_display_text(Sign::Positive, "0050", "k", "Ω")[..],
            "50 kΩ"
        );
    }

    #[test]
    fn test_render_si_text() {
        assert_eq!(&render_si_text(123.4, 1, "V")[..], "123.4 V");
        assert_eq!(&render_si_text(-0.001234, 6, "A")[..], "-0.001234 A");
        // Trailing zeros trim down to one digit after the point.
        assert_eq!(&render_si_text(12340.0, 2, "Ω")[..], "12340.0 Ω");
        assert_eq!(&render_si_text(0.0, 1, "V")[..], "0.0 V");
    }

    #[test]
    fn test_render_si_text_integer_precision() {
        assert_eq!(&render_si_text(1234.0, 0, "Hz")[..], "1234 Hz");
    }
}
