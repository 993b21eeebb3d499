// src/common/labels.rs

use core::fmt;

/// Reading sign from frame byte 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Maps the wire byte (`+` = 0x2B, `-` = 0x2D) to a sign.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x2B => Some(Sign::Positive),
            0x2D => Some(Sign::Negative),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    #[inline]
    pub const fn factor(&self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Measurement mode labels (status byte SB1).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Dc,
    Ac,
    /// Relative/delta display; the reading is an offset, not an absolute value.
    Rel,
    Hold,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Dc => "DC",
            Mode::Ac => "AC",
            Mode::Rel => "REL",
            Mode::Hold => "HOLD",
        }
    }
}

/// Measurement unit labels (status byte SB4).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Unit {
    Volt,
    Ampere,
    Ohm,
    /// Transistor current gain.
    Hfe,
    Hertz,
    Farad,
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Ampere => "A",
            Unit::Ohm => "Ω",
            Unit::Hfe => "hFE",
            Unit::Hertz => "Hz",
            Unit::Farad => "F",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }
}

/// SI magnitude prefixes (status bytes SB2/SB3). `%` rides along here on the
/// wire even though it scales nothing; it shows up for duty-cycle readings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Prefix {
    Nano,
    Micro,
    Milli,
    Kilo,
    Mega,
    Percent,
}

impl Prefix {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Percent => "%",
        }
    }

    /// Factor that rescales a prefixed reading to the unprefixed base unit.
    pub const fn si_multiplier(&self) -> f64 {
        match self {
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Percent => 1.0,
        }
    }

    /// Fractional digits gained when a sub-unit reading is rescaled down to
    /// the base unit (used to size fixed-point SI formatting).
    pub const fn decimal_shift(&self) -> usize {
        match self {
            Prefix::Nano => 9,
            Prefix::Micro => 6,
            Prefix::Milli => 3,
            Prefix::Kilo | Prefix::Mega | Prefix::Percent => 0,
        }
    }
}

/// Auxiliary display annunciators that fit none of the other fields.
///
/// `Z2`..`Z4` are unnamed segments in the datasheet; they are reported
/// verbatim rather than guessed at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InfoFlag {
    Auto,
    Diode,
    Z2,
    Max,
    Min,
    Apo,
    Bat,
    Z3,
    Beep,
    Z4,
}

impl InfoFlag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InfoFlag::Auto => "AUTO",
            InfoFlag::Diode => "Diode",
            InfoFlag::Z2 => "Z2",
            InfoFlag::Max => "MAX",
            InfoFlag::Min => "MIN",
            InfoFlag::Apo => "APO",
            InfoFlag::Bat => "Bat",
            InfoFlag::Z3 => "Z3",
            InfoFlag::Beep => "Beep",
            InfoFlag::Z4 => "Z4",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
