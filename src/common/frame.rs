// src/common/frame.rs

/// Length of one FS9922-DMM4 telemetry frame on the wire.
pub const FRAME_LEN: usize = 14;

/// Digit bytes 1..=4 carry this sequence (`'?','0',':','?'`) when the
/// display shows an overflow instead of a reading.
pub const OVERFLOW_SENTINEL: [u8; 4] = [0x3F, 0x30, 0x3A, 0x3F];

/// Byte offsets within a frame.
pub mod offset {
    /// Sign character, `+` (0x2B) or `-` (0x2D).
    pub const SIGN: usize = 0;
    /// First of the four display digit bytes (offsets 1..=4).
    pub const DIGITS_START: usize = 1;
    /// Fixed space separator (0x20).
    pub const SPACE: usize = 5;
    /// Decimal point position code.
    pub const POINT: usize = 6;
    /// First of the four status bytes SB1..SB4 (offsets 7..=10).
    pub const STATUS_START: usize = 7;
    /// Bar graph level in the low 7 bits, direction in bit 7.
    pub const BAR_GRAPH: usize = 11;
    /// Frame terminator, CR (0x0D) then LF (0x0A).
    pub const CR: usize = 12;
    pub const LF: usize = 13;
}

/// One raw 14-byte frame as produced by the synchronizer.
///
/// A `Frame` is a transient value: the synchronizer builds it, the decoder
/// consumes it, nothing retains it afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    #[inline]
    pub const fn sign_byte(&self) -> u8 {
        self.0[offset::SIGN]
    }

    /// The four display digit bytes (offsets 1..=4).
    #[inline]
    pub const fn digit_bytes(&self) -> [u8; 4] {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }

    #[inline]
    pub const fn point_code(&self) -> u8 {
        self.0[offset::POINT]
    }

    /// Status byte SBn, `n` in 1..=4 following the datasheet numbering.
    #[inline]
    pub const fn status_byte(&self, n: usize) -> u8 {
        debug_assert!(n >= 1 && n <= 4);
        self.0[offset::STATUS_START + n - 1]
    }

    #[inline]
    pub const fn bar_graph_byte(&self) -> u8 {
        self.0[offset::BAR_GRAPH]
    }

    #[inline]
    pub const fn terminator(&self) -> [u8; 2] {
        [self.0[offset::CR], self.0[offset::LF]]
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Frame::new(bytes)
    }
}
