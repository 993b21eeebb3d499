// src/common/timing.rs

use core::time::Duration;

// All FS9922-DMM4 based meters emit at 2400 baud, 8N1:
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte.

/// Nominal duration of a single bit at 2400 baud.
pub const BIT_DURATION: Duration = Duration::from_nanos(416_667); // Approx 0.417 ms
/// Nominal duration of a single byte (10 bits total) at 2400 baud (8N1 format).
pub const BYTE_DURATION: Duration = Duration::from_micros(4_167); // Approx 4.17 ms
/// Nominal duration of one complete 14-byte frame.
pub const FRAME_DURATION: Duration = Duration::from_micros(58_333); // Approx 58 ms

/// Default idle gap used to infer frame boundaries.
///
/// The protocol has no start marker; the only alignment signal is that the
/// meter pauses between frames for much longer than the ~4 ms between bytes
/// of one frame. 100 ms sits comfortably between the two.
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(100);

/// Poll interval while the byte source reports `WouldBlock`.
pub const POLL_INTERVAL_US: u32 = 100;
