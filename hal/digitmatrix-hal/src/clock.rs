//! Monotonic time source
//!
//! The debounce logic compares microsecond timestamps taken at each button
//! edge. Implementations must never go backwards while the device is
//! powered.

/// Monotonic microsecond clock
pub trait MonotonicClock {
    /// Microseconds since boot
    fn now_us(&self) -> u64;
}
