// src/io.rs

use crate::common::hal_traits::{Fs9922Clock, Fs9922Source, Fs9922Timer};
use std::io::{ErrorKind, Read};
use std::time::{Instant, SystemTime};

/// Adapts any `std::io::Read` - a serial port handle or a capture file -
/// to the byte-source and timer traits the synchronizer needs.
///
/// A read of zero bytes maps to clean exhaustion (`Ok(None)`), which is how
/// a replayed capture ends the sampling loop without diagnostics.
///
/// Idle-gap resynchronization only works if stalls surface as `WouldBlock`;
/// for a live serial device, configure a read timeout on the port (timed-out
/// and interrupted reads are mapped to `WouldBlock` here) or put the
/// descriptor into non-blocking mode.
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        ReaderSource { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Fs9922Source for ReaderSource<R> {
    type Error = std::io::Error;

    fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                ) =>
            {
                Err(nb::Error::WouldBlock)
            }
            Err(e) => Err(nb::Error::Other(e)),
        }
    }
}

impl<R: Read> Fs9922Timer for ReaderSource<R> {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(core::time::Duration::from_micros(u64::from(us)));
    }
}

/// Wall clock backed by `std::time::SystemTime`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Fs9922Clock for SystemClock {
    type Timestamp = SystemTime;

    fn timestamp(&mut self) -> SystemTime {
        SystemTime::now()
    }
}
