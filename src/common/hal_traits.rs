// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in monotonic time, as produced by [`Fs9922Timer::now`].
///
/// Blanket-implemented for anything with the required arithmetic, so
/// `std::time::Instant` and embedded tick counters qualify alike.
pub trait Fs9922Instant:
    Copy + Add<Duration, Output = Self> + Sub<Self, Output = Duration> + PartialOrd
{
}

impl<T> Fs9922Instant for T where
    T: Copy + Add<Duration, Output = T> + Sub<T, Output = Duration> + PartialOrd
{
}

/// Abstraction for the monotonic clock the frame synchronizer measures
/// idle gaps against.
pub trait Fs9922Timer {
    type Instant: Fs9922Instant;

    /// Current monotonic time.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    /// Used to avoid busy-spinning while the source would block.
    fn delay_us(&mut self, us: u32);
}

/// Abstraction for synchronous (non-blocking) access to the raw DMM byte
/// stream, backed by a serial device or a replayed capture file.
pub trait Fs9922Source {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Attempts to read a single byte from the stream.
    ///
    /// Returns `Ok(Some(byte))` if a byte was read, `Ok(None)` if the source
    /// is cleanly exhausted (e.g. a capture file reached its end - this is
    /// terminal but not an error), or `Err(nb::Error::WouldBlock)` if no byte
    /// is available yet. Transport failures are returned as
    /// `Err(nb::Error::Other(Self::Error))`.
    fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error>;
}

/// Abstraction for the wall clock that timestamps decoded records.
///
/// Injected so the decode logic itself stays deterministic and testable.
pub trait Fs9922Clock {
    type Timestamp: Debug;

    /// Current wall-clock timestamp.
    fn timestamp(&mut self) -> Self::Timestamp;
}
