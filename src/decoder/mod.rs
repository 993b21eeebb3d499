// src/decoder/mod.rs

mod format;
pub mod record;
mod status;

pub use record::MeasurementRecord;

use crate::common::error::DecodeError;
use crate::common::frame::{offset, Frame, OVERFLOW_SENTINEL};
use crate::common::hal_traits::Fs9922Clock;
use crate::common::labels::Sign;
use arrayvec::ArrayString;
use record::{DIGITS_CAP, PREFIX_TEXT_CAP, UNIT_TEXT_CAP};

/// Decodes one frame, reading the record timestamp from the supplied clock.
pub fn decode_with_clock<C>(
    frame: &Frame,
    clock: &mut C,
) -> Result<MeasurementRecord<C::Timestamp>, DecodeError>
where
    C: Fs9922Clock,
{
    decode_frame(frame, clock.timestamp())
}

/// Decodes one 14-byte frame into a measurement record.
///
/// Pure and deterministic given the frame bytes; `captured_at` is stored
/// verbatim. Each validation gate is hard: the first failure returns its
/// error and no partial record escapes.
pub fn decode_frame<T>(frame: &Frame, captured_at: T) -> Result<MeasurementRecord<T>, DecodeError> {
    check_framing(frame)?;

    let sign_byte = frame.sign_byte();
    let sign = Sign::from_byte(sign_byte).ok_or(DecodeError::InvalidSign(sign_byte))?;

    let digits = decode_digits(frame)?;
    let fields = status::decode_status(frame);

    // Bit 7 of the bar graph byte carries the direction, not the level.
    let bar_graph = frame.bar_graph_byte() & 0x7F;

    let (multiplier, shift) = match fields.prefix.as_slice() {
        [prefix] => (prefix.si_multiplier(), prefix.decimal_shift()),
        // Empty or conflicting prefixes: report the display value unscaled.
        _ => (1.0, 0),
    };
    let si_value = if digits.overflow {
        0.0
    } else {
        digits.magnitude * multiplier * sign.factor()
    };

    let prefix_text =
        format::join_labels::<PREFIX_TEXT_CAP, _>(fields.prefix.iter().map(|p| p.as_str()));
    let unit_text =
        format::join_labels::<UNIT_TEXT_CAP, _>(fields.unit.iter().map(|u| u.as_str()));
    let display_text = format::render_display_text(sign, &digits.text, &prefix_text, &unit_text);
    let decimals = (digits.fraction_digits + shift).max(1);
    let si_text = format::render_si_text(si_value, decimals, &unit_text);

    Ok(MeasurementRecord {
        captured_at,
        sign,
        digits: digits.text,
        mode: fields.mode,
        unit: fields.unit,
        prefix: fields.prefix,
        info: fields.info,
        bar_graph,
        bar_graph_shown: fields.bar_graph_shown,
        battery_warning: fields.battery_warning,
        auto_range_active: fields.auto_range_active,
        hold_active: fields.hold_active,
        delta_active: fields.delta_active,
        overflow: digits.overflow,
        si_value,
        display_text,
        si_text,
    })
}

/// Intermediate result of the digit gates (steps 3 and 4).
struct Digits {
    text: ArrayString<DIGITS_CAP>,
    magnitude: f64,
    fraction_digits: usize,
    overflow: bool,
}

fn check_framing(frame: &Frame) -> Result<(), DecodeError> {
    let bytes = frame.as_bytes();
    const FIXED: [(usize, u8); 3] = [(offset::SPACE, 0x20), (offset::CR, 0x0D), (offset::LF, 0x0A)];
    for (offset, expected) in FIXED {
        if bytes[offset] != expected {
            return Err(DecodeError::FrameFormat {
                offset,
                byte: bytes[offset],
            });
        }
    }
    Ok(())
}

const DIVISORS: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];

fn decode_digits(frame: &Frame) -> Result<Digits, DecodeError> {
    let raw = frame.digit_bytes();

    if raw == OVERFLOW_SENTINEL {
        let mut text = ArrayString::new();
        let _ = text.try_push_str("OVF");
        return Ok(Digits {
            text,
            magnitude: 0.0,
            fraction_digits: 0,
            overflow: true,
        });
    }

    let point_index = match frame.point_code() {
        0x31 => Some(1),
        0x32 => Some(2),
        // 0x33 and 0x34 both place the point after the third digit on this
        // chipset family; any other code means a plain four-digit integer.
        0x33 | 0x34 => Some(3),
        _ => None,
    };

    let mut text = ArrayString::new();
    let mut value: u32 = 0;
    for (i, &byte) in raw.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(DecodeError::InvalidDigit {
                offset: offset::DIGITS_START + i,
                byte,
            });
        }
        if point_index == Some(i) {
            let _ = text.try_push('.');
        }
        let _ = text.try_push(byte as char);
        value = value * 10 + u32::from(byte - b'0');
    }

    let fraction_digits = point_index.map_or(0, |k| raw.len() - k);
    Ok(Digits {
        text,
        magnitude: f64::from(value) / DIVISORS[fraction_digits],
        fraction_digits,
        overflow: false,
    })
}
