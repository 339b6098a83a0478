//! Microsecond clock backed by the embassy time driver

use embassy_time::Instant;

use digitmatrix_hal::MonotonicClock;

/// Reads the RP2040 timer through `embassy_time`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
