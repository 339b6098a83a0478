//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations. GPIO and clock traits live in
//! `digitmatrix-hal` and are re-exported here.

pub mod pixel;

pub use digitmatrix_hal::{InputPin, MonotonicClock, OutputPin};
pub use pixel::PixelSink;
