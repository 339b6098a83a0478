//! Application state
//!
//! The displayed digit is the only mutable state. It changes only through
//! debounced button events; everything else reads it.

pub mod digit;
pub mod events;
pub mod machine;
pub mod shared;

pub use digit::{Digit, DigitError};
pub use events::{ButtonEvent, ButtonPress};
pub use machine::{EdgeOutcome, InputDebouncer};
pub use shared::SharedDebouncer;
