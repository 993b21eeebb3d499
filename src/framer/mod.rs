// src/framer/mod.rs

use crate::common::error::Fs9922Error;
use crate::common::frame::{Frame, FRAME_LEN};
use crate::common::hal_traits::{Fs9922Source, Fs9922Timer};
use crate::common::timing;
use core::time::Duration;

/// Turns the raw, markerless DMM byte stream into discrete 14-byte frames.
///
/// The protocol carries no start marker, so the only alignment signal is the
/// idle gap the meter leaves between frames (much longer than the gap between
/// bytes of one frame). A fresh synchronizer therefore discards bytes until
/// it has observed one idle gap; from then on every 14 accumulated bytes form
/// a frame, and any later idle expiry mid-frame drops the partial bytes and
/// restarts accumulation.
///
/// Replayed capture files deliver their bytes without wall-clock gaps; when
/// the capture is known to start on a frame boundary, construct the
/// synchronizer with [`FrameSynchronizer::assume_aligned`] instead.
pub struct FrameSynchronizer<IF> {
    interface: IF,
    synced: bool,
}

impl<IF> FrameSynchronizer<IF>
where
    IF: Fs9922Source + Fs9922Timer,
{
    /// Creates a synchronizer that waits for one idle gap before trusting
    /// its alignment. Use this for live serial streams.
    pub fn new(interface: IF) -> Self {
        FrameSynchronizer {
            interface,
            synced: false,
        }
    }

    /// Creates a synchronizer that treats the very first byte as the start
    /// of a frame. Use this for replayed captures that begin on a frame
    /// boundary.
    pub fn assume_aligned(interface: IF) -> Self {
        FrameSynchronizer {
            interface,
            synced: true,
        }
    }

    /// Releases the underlying interface.
    pub fn into_inner(self) -> IF {
        self.interface
    }

    /// Reads the next complete frame from the stream.
    ///
    /// Returns `Ok(Some(frame))` once 14 bytes have accumulated,
    /// `Ok(None)` on clean source exhaustion (end of a replayed capture -
    /// terminal, not an error), or `Err` on a transport failure (fatal,
    /// never retried here).
    ///
    /// An idle gap of `idle_timeout` without a byte never surfaces to the
    /// caller; it only discards the partial frame and restarts accumulation.
    /// [`timing::IDLE_TIMEOUT`] is a suitable default.
    pub fn next_frame(
        &mut self,
        idle_timeout: Duration,
    ) -> Result<Option<Frame>, Fs9922Error<IF::Error>> {
        let mut buf = [0u8; FRAME_LEN];
        let mut len = 0usize;
        let mut deadline = self.interface.now() + idle_timeout;

        loop {
            match self.interface.read_byte() {
                Ok(Some(byte)) => {
                    if self.synced {
                        buf[len] = byte;
                        len += 1;
                        if len == FRAME_LEN {
                            return Ok(Some(Frame::new(buf)));
                        }
                    }
                    deadline = self.interface.now() + idle_timeout;
                }
                Ok(None) => {
                    // Partial bytes at end of capture are dropped silently.
                    return Ok(None);
                }
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        if len > 0 {
                            #[cfg(feature = "log")]
                            log::debug!("idle gap: dropping {} partial frame byte(s)", len);
                            len = 0;
                        }
                        self.synced = true;
                        deadline = self.interface.now() + idle_timeout;
                    } else {
                        self.interface.delay_us(timing::POLL_INTERVAL_US);
                    }
                }
                Err(nb::Error::Other(e)) => return Err(Fs9922Error::Io(e)),
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use nb::Result as NbResult;

    // --- Mock Instant ---
    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct MockInstant(u64);
    impl core::ops::Add<Duration> for MockInstant {
        type Output = Self;
        fn add(self, rhs: Duration) -> Self {
            MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
        }
    }
    impl core::ops::Sub<MockInstant> for MockInstant {
        type Output = Duration;
        fn sub(self, rhs: MockInstant) -> Duration {
            Duration::from_micros(self.0.saturating_sub(rhs.0))
        }
    }

    // --- Mock transport error ---
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct MockCommError;

    // --- Scripted source events ---
    #[derive(Debug, Copy, Clone)]
    enum MockEvent {
        /// Deliver one byte immediately.
        Byte(u8),
        /// Report WouldBlock for this many microseconds of mock time.
        Stall(u64),
        /// Clean exhaustion (capture EOF).
        Eof,
        /// Transport failure.
        Fail,
    }

    struct MockInterface {
        events: &'static [MockEvent],
        pos: usize,
        time_us: u64,
        stall_started: Option<u64>,
    }

    impl MockInterface {
        fn new(events: &'static [MockEvent]) -> Self {
            MockInterface {
                events,
                pos: 0,
                time_us: 0,
                stall_started: None,
            }
        }
    }

    impl Fs9922Timer for MockInterface {
        type Instant = MockInstant;
        fn now(&self) -> MockInstant {
            MockInstant(self.time_us)
        }
        fn delay_us(&mut self, us: u32) {
            self.time_us = self.time_us.saturating_add(us as u64);
        }
    }

    impl Fs9922Source for MockInterface {
        type Error = MockCommError;
        fn read_byte(&mut self) -> NbResult<Option<u8>, Self::Error> {
            match self.events.get(self.pos) {
                None | Some(MockEvent::Eof) => Ok(None),
                Some(MockEvent::Byte(byte)) => {
                    self.pos += 1;
                    Ok(Some(*byte))
                }
                Some(MockEvent::Stall(us)) => {
                    let started = *self.stall_started.get_or_insert(self.time_us);
                    if self.time_us.saturating_sub(started) >= *us {
                        self.stall_started = None;
                        self.pos += 1;
                        self.read_byte()
                    } else {
                        Err(nb::Error::WouldBlock)
                    }
                }
                Some(MockEvent::Fail) => {
                    self.pos += 1;
                    Err(nb::Error::Other(MockCommError))
                }
            }
        }
    }

    const IDLE: Duration = Duration::from_millis(100);

    const FRAME_A: [u8; FRAME_LEN] = [
        b'+', b'1', b'2', b'3', b'4', 0x20, 0x33, 0x30, 0x00, 0x00, 0x80, 0x1E, 0x0D, 0x0A,
    ];

    #[test]
    fn test_aligned_capture_yields_frame_then_eof() {
        static EVENTS: [MockEvent; FRAME_LEN + 1] = {
            let mut e = [MockEvent::Eof; FRAME_LEN + 1];
            let mut i = 0;
            while i < FRAME_LEN {
                e[i] = MockEvent::Byte(FRAME_A[i]);
                i += 1;
            }
            e
        };
        let mut sync = FrameSynchronizer::assume_aligned(MockInterface::new(&EVENTS));

        let frame = sync.next_frame(IDLE).unwrap().unwrap();
        assert_eq!(frame.as_bytes(), &FRAME_A);
        assert_eq!(sync.next_frame(IDLE).unwrap(), None);
    }

    #[test]
    fn test_unaligned_prefix_is_discarded_on_idle_gap() {
        // 20 garbage bytes, a stall longer than the idle timeout, then one
        // complete frame: exactly one frame comes out, built from the last
        // 14 bytes only.
        static EVENTS: [MockEvent; 20 + 1 + FRAME_LEN + 1] = {
            let mut e = [MockEvent::Eof; 20 + 1 + FRAME_LEN + 1];
            let mut i = 0;
            while i < 20 {
                e[i] = MockEvent::Byte(0xAA);
                i += 1;
            }
            e[20] = MockEvent::Stall(200_000);
            let mut j = 0;
            while j < FRAME_LEN {
                e[21 + j] = MockEvent::Byte(FRAME_A[j]);
                j += 1;
            }
            e
        };
        let mut sync = FrameSynchronizer::new(MockInterface::new(&EVENTS));

        let frame = sync.next_frame(IDLE).unwrap().unwrap();
        assert_eq!(frame.as_bytes(), &FRAME_A);
        // Nothing from the discarded prefix is reused or merged.
        assert_eq!(sync.next_frame(IDLE).unwrap(), None);
    }

    #[test]
    fn test_partial_frame_dropped_on_resync() {
        // Aligned stream: 5 bytes, a long stall, then a full frame. The 5
        // bytes are discarded by the idle expiry, not merged.
        static EVENTS: [MockEvent; 5 + 1 + FRAME_LEN + 1] = {
            let mut e = [MockEvent::Eof; 5 + 1 + FRAME_LEN + 1];
            let mut i = 0;
            while i < 5 {
                e[i] = MockEvent::Byte(0x55);
                i += 1;
            }
            e[5] = MockEvent::Stall(150_000);
            let mut j = 0;
            while j < FRAME_LEN {
                e[6 + j] = MockEvent::Byte(FRAME_A[j]);
                j += 1;
            }
            e
        };
        let mut sync = FrameSynchronizer::assume_aligned(MockInterface::new(&EVENTS));

        let frame = sync.next_frame(IDLE).unwrap().unwrap();
        assert_eq!(frame.as_bytes(), &FRAME_A);
    }

    #[test]
    fn test_eof_mid_frame_is_clean_end() {
        static EVENTS: [MockEvent; 4] = [
            MockEvent::Byte(b'+'),
            MockEvent::Byte(b'1'),
            MockEvent::Byte(b'2'),
            MockEvent::Eof,
        ];
        let mut sync = FrameSynchronizer::assume_aligned(MockInterface::new(&EVENTS));
        assert_eq!(sync.next_frame(IDLE).unwrap(), None);
    }

    #[test]
    fn test_transport_error_is_fatal() {
        static EVENTS: [MockEvent; 3] = [
            MockEvent::Byte(b'+'),
            MockEvent::Byte(b'1'),
            MockEvent::Fail,
        ];
        let mut sync = FrameSynchronizer::assume_aligned(MockInterface::new(&EVENTS));
        assert!(matches!(
            sync.next_frame(IDLE),
            Err(Fs9922Error::Io(MockCommError))
        ));
    }

    #[test]
    fn test_back_to_back_frames() {
        static EVENTS: [MockEvent; 2 * FRAME_LEN + 1] = {
            let mut e = [MockEvent::Eof; 2 * FRAME_LEN + 1];
            let mut i = 0;
            while i < FRAME_LEN {
                e[i] = MockEvent::Byte(FRAME_A[i]);
                e[FRAME_LEN + i] = MockEvent::Byte(FRAME_A[i]);
                i += 1;
            }
            e
        };
        let mut sync = FrameSynchronizer::assume_aligned(MockInterface::new(&EVENTS));

        assert!(sync.next_frame(IDLE).unwrap().is_some());
        assert!(sync.next_frame(IDLE).unwrap().is_some());
        assert_eq!(sync.next_frame(IDLE).unwrap(), None);
    }
}
