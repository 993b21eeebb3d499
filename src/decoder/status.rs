// src/decoder/status.rs

use super::record::{INFO_CAP, MODE_CAP, PREFIX_CAP, UNIT_CAP};
use crate::common::frame::Frame;
use crate::common::labels::{InfoFlag, Mode, Prefix, Unit};
use arrayvec::ArrayVec;

/// What a set status bit contributes to the record.
#[derive(Debug, Copy, Clone)]
pub(crate) enum BitAction {
    Mode(Mode),
    ModeFlagged(Mode, RecordFlag),
    Prefix(Prefix),
    Unit(Unit),
    Info(InfoFlag),
    InfoFlagged(InfoFlag, RecordFlag),
    /// Sets a boolean only, no label (SB1 bit 0: bar graph visibility).
    FlagOnly(RecordFlag),
}

#[derive(Debug, Copy, Clone)]
pub(crate) enum RecordFlag {
    AutoRange,
    Delta,
    Hold,
    Battery,
    BarGraphShown,
}

/// One entry per assigned status bit: (frame offset, bit index, action).
///
/// Iterated in this exact order per decode - most significant bit first
/// within each byte, SB1 before SB2 before SB3 before SB4 - so labels
/// accumulate in wire order. Bits not listed are unassigned on this chipset.
pub(crate) const STATUS_BITS: &[(usize, u8, BitAction)] = &[
    // SB1 (offset 7), bits 7..6 unassigned
    (7, 5, BitAction::InfoFlagged(InfoFlag::Auto, RecordFlag::AutoRange)),
    (7, 4, BitAction::Mode(Mode::Dc)),
    (7, 3, BitAction::Mode(Mode::Ac)),
    (7, 2, BitAction::ModeFlagged(Mode::Rel, RecordFlag::Delta)),
    (7, 1, BitAction::ModeFlagged(Mode::Hold, RecordFlag::Hold)),
    (7, 0, BitAction::FlagOnly(RecordFlag::BarGraphShown)),
    // SB2 (offset 8)
    (8, 7, BitAction::Info(InfoFlag::Diode)),
    (8, 6, BitAction::Info(InfoFlag::Z2)),
    (8, 5, BitAction::Info(InfoFlag::Max)),
    (8, 4, BitAction::Info(InfoFlag::Min)),
    (8, 3, BitAction::Info(InfoFlag::Apo)),
    (8, 2, BitAction::InfoFlagged(InfoFlag::Bat, RecordFlag::Battery)),
    (8, 1, BitAction::Prefix(Prefix::Nano)),
    (8, 0, BitAction::Info(InfoFlag::Z3)),
    // SB3 (offset 9)
    (9, 7, BitAction::Prefix(Prefix::Micro)),
    (9, 6, BitAction::Prefix(Prefix::Milli)),
    (9, 5, BitAction::Prefix(Prefix::Kilo)),
    (9, 4, BitAction::Prefix(Prefix::Mega)),
    (9, 3, BitAction::Info(InfoFlag::Beep)),
    (9, 2, BitAction::Info(InfoFlag::Diode)),
    (9, 1, BitAction::Prefix(Prefix::Percent)),
    (9, 0, BitAction::Info(InfoFlag::Z4)),
    // SB4 (offset 10)
    (10, 7, BitAction::Unit(Unit::Volt)),
    (10, 6, BitAction::Unit(Unit::Ampere)),
    (10, 5, BitAction::Unit(Unit::Ohm)),
    (10, 4, BitAction::Unit(Unit::Hfe)),
    (10, 3, BitAction::Unit(Unit::Hertz)),
    (10, 2, BitAction::Unit(Unit::Farad)),
    (10, 1, BitAction::Unit(Unit::Celsius)),
    (10, 0, BitAction::Unit(Unit::Fahrenheit)),
];

/// Accumulated result of walking the status bit table.
#[derive(Debug, Default)]
pub(crate) struct StatusFields {
    pub mode: ArrayVec<Mode, MODE_CAP>,
    pub unit: ArrayVec<Unit, UNIT_CAP>,
    pub prefix: ArrayVec<Prefix, PREFIX_CAP>,
    pub info: ArrayVec<InfoFlag, INFO_CAP>,
    pub bar_graph_shown: bool,
    pub battery_warning: bool,
    pub auto_range_active: bool,
    pub hold_active: bool,
    pub delta_active: bool,
}

impl StatusFields {
    fn set(&mut self, flag: RecordFlag) {
        match flag {
            RecordFlag::AutoRange => self.auto_range_active = true,
            RecordFlag::Delta => self.delta_active = true,
            RecordFlag::Hold => self.hold_active = true,
            RecordFlag::Battery => self.battery_warning = true,
            RecordFlag::BarGraphShown => self.bar_graph_shown = true,
        }
    }
}

/// Walks the table once over status bytes SB1..SB4. Competing bits within
/// one field simply accumulate; exclusivity is an upstream protocol
/// guarantee, not something checked here.
pub(crate) fn decode_status(frame: &Frame) -> StatusFields {
    let bytes = frame.as_bytes();
    let mut fields = StatusFields::default();

    for &(offset, bit, action) in STATUS_BITS {
        if bytes[offset] & (1 << bit) == 0 {
            continue;
        }
        // Capacities cover every listed bit, pushes cannot fail.
        match action {
            BitAction::Mode(mode) => {
                let _ = fields.mode.try_push(mode);
            }
            BitAction::ModeFlagged(mode, flag) => {
                let _ = fields.mode.try_push(mode);
                fields.set(flag);
            }
            BitAction::Prefix(prefix) => {
                let _ = fields.prefix.try_push(prefix);
            }
            BitAction::Unit(unit) => {
                let _ = fields.unit.try_push(unit);
            }
            BitAction::Info(info) => {
                let _ = fields.info.try_push(info);
            }
            BitAction::InfoFlagged(info, flag) => {
                let _ = fields.info.try_push(info);
                fields.set(flag);
            }
            BitAction::FlagOnly(flag) => fields.set(flag),
        }
    }

    fields
}
