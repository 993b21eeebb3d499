// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(feature = "std")]
extern crate std;

pub mod common;
pub mod decoder;
pub mod framer;
#[cfg(feature = "std")]
pub mod io;

// Re-export key types for convenience
pub use common::error::{DecodeError, Fs9922Error};
pub use common::frame::Frame;
pub use decoder::{decode_frame, decode_with_clock, MeasurementRecord};
pub use framer::FrameSynchronizer;
