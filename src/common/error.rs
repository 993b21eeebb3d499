// src/common/error.rs

use core::fmt;

// No cfg_attr needed here, thiserror is always available
#[derive(Debug, thiserror::Error)]
pub enum Fs9922Error<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying transport error from the byte-source implementation.
    /// Fatal: terminates the sampling loop, never retried.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// A complete frame was read but failed a decode gate. Recoverable:
    /// the caller may drop the frame and keep sampling.
    #[error("frame decode failed: {0}")]
    Decode(DecodeError),
}

// Allow mapping from underlying transport error if From is implemented
impl<E: core::fmt::Debug> From<E> for Fs9922Error<E> {
    fn from(e: E) -> Self {
        Fs9922Error::Io(e)
    }
}

/// Error type specific to decoding a single 14-byte frame.
///
/// Each variant corresponds to one hard gate; the first failing gate wins
/// and no partial record is ever produced.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DecodeError {
    /// A fixed framing byte (space at offset 5, CR/LF at 12..=13) is wrong.
    FrameFormat { offset: usize, byte: u8 },
    /// Byte 0 is neither `+` nor `-`.
    InvalidSign(u8),
    /// A digit byte outside the overflow sentinel is not ASCII `0`..`9`.
    InvalidDigit { offset: usize, byte: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::FrameFormat { offset, byte } => {
                write!(f, "bad framing byte {:#04x} at offset {}", byte, offset)
            }
            DecodeError::InvalidSign(byte) => write!(f, "invalid sign byte {:#04x}", byte),
            DecodeError::InvalidDigit { offset, byte } => {
                write!(f, "invalid digit byte {:#04x} at offset {}", byte, offset)
            }
        }
    }
}

// If std feature is enabled, implement the Error trait
#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
