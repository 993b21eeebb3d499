// src/decoder/record.rs

use super::format::join_labels;
use crate::common::labels::{InfoFlag, Mode, Prefix, Sign, Unit};
use arrayvec::{ArrayString, ArrayVec};

// Capacities are sized for the worst case the status tables can produce,
// so the fill paths never truncate.

/// "d.ddd" is the longest digit rendering; "OVF" also fits.
pub const DIGITS_CAP: usize = 5;
pub const MODE_CAP: usize = 4;
pub const UNIT_CAP: usize = 8;
pub const PREFIX_CAP: usize = 6;
/// Eleven info bits exist across SB1..SB3 (Diode appears twice).
pub const INFO_CAP: usize = 12;

pub const MODE_TEXT_CAP: usize = 16;
pub const UNIT_TEXT_CAP: usize = 24;
pub const PREFIX_TEXT_CAP: usize = 16;
pub const INFO_TEXT_CAP: usize = 48;
pub const FULL_UNIT_TEXT_CAP: usize = 40;
/// Sign, pointed digits, space, then the full prefix and unit joins
/// (42 bytes if every prefix and unit bit is set at once).
pub const DISPLAY_TEXT_CAP: usize = 48;
pub const SI_TEXT_CAP: usize = 40;

/// One fully decoded measurement.
///
/// A record only ever exists as the result of a completely successful
/// decode; there is no partially populated state observable outside the
/// decoder. Treat it as immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord<T> {
    /// Wall-clock timestamp taken at decode time.
    pub captured_at: T,
    pub sign: Sign,
    /// The 4-digit display with the decimal point inserted, or `"OVF"`.
    pub digits: ArrayString<DIGITS_CAP>,
    /// Mode labels in wire order (DC, AC, REL, HOLD).
    pub mode: ArrayVec<Mode, MODE_CAP>,
    /// Unit labels in wire order. The protocol promises exactly one; the
    /// decoder reports what it observes without enforcing exclusivity.
    pub unit: ArrayVec<Unit, UNIT_CAP>,
    /// Prefix labels in wire order, same non-enforcement as `unit`.
    pub prefix: ArrayVec<Prefix, PREFIX_CAP>,
    /// Auxiliary annunciators in wire order.
    pub info: ArrayVec<InfoFlag, INFO_CAP>,
    /// Bar graph level, low 7 bits of frame byte 11. Nominal display range
    /// is 0..=60; larger values signal the next autorange step and are
    /// preserved as-is.
    pub bar_graph: u8,
    pub bar_graph_shown: bool,
    pub battery_warning: bool,
    pub auto_range_active: bool,
    pub hold_active: bool,
    pub delta_active: bool,
    pub overflow: bool,
    /// Reading rescaled to the unprefixed base unit. Meaningless (0.0) when
    /// `overflow` is set.
    pub si_value: f64,
    /// Display value with prefix and unit, e.g. `"123.4 mV"`.
    pub display_text: ArrayString<DISPLAY_TEXT_CAP>,
    /// SI-normalized value with the base unit, e.g. `"0.1234 V"`.
    pub si_text: ArrayString<SI_TEXT_CAP>,
}

impl<T> MeasurementRecord<T> {
    /// Mode labels joined with spaces, e.g. `"AC HOLD"`.
    pub fn mode_text(&self) -> ArrayString<MODE_TEXT_CAP> {
        join_labels::<MODE_TEXT_CAP, _>(self.mode.iter().map(|m| m.as_str()))
    }

    /// Unit labels joined with spaces (normally a single symbol).
    pub fn unit_text(&self) -> ArrayString<UNIT_TEXT_CAP> {
        join_labels::<UNIT_TEXT_CAP, _>(self.unit.iter().map(|u| u.as_str()))
    }

    /// Prefix labels joined with spaces (normally a single symbol or empty).
    pub fn prefix_text(&self) -> ArrayString<PREFIX_TEXT_CAP> {
        join_labels::<PREFIX_TEXT_CAP, _>(self.prefix.iter().map(|p| p.as_str()))
    }

    /// Info annunciators joined with spaces, e.g. `"AUTO APO"`.
    pub fn info_text(&self) -> ArrayString<INFO_TEXT_CAP> {
        join_labels::<INFO_TEXT_CAP, _>(self.info.iter().map(|i| i.as_str()))
    }

    /// Prefix and unit run together, e.g. `"mV"`.
    pub fn full_unit_text(&self) -> ArrayString<FULL_UNIT_TEXT_CAP> {
        let mut out = ArrayString::new();
        let _ = out.try_push_str(&self.prefix_text());
        let _ = out.try_push_str(&self.unit_text());
        out
    }
}
