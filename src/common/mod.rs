// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod labels;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::{DecodeError, Fs9922Error};

// From frame.rs
pub use frame::{Frame, FRAME_LEN};

// From hal_traits.rs
pub use hal_traits::{Fs9922Clock, Fs9922Instant, Fs9922Source, Fs9922Timer};

// From labels.rs
pub use labels::{InfoFlag, Mode, Prefix, Sign, Unit};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
