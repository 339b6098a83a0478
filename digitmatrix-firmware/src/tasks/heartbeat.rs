//! Heartbeat task
//!
//! Blinks the status LED on a fixed ticker so a stalled executor is visible
//! at a glance. Shares nothing with the button path.

use core::ops::ControlFlow;

use defmt::*;
use embassy_time::{Duration, Ticker};

use digitmatrix_core::StatusBlinker;
use digitmatrix_hal_rp2040::GpioOutput;

#[embassy_executor::task]
pub async fn heartbeat_task(mut blinker: StatusBlinker<GpioOutput<'static>>, interval_ms: u64) {
    info!("Heartbeat task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms));

    loop {
        ticker.next().await;

        let ControlFlow::Continue(()) = blinker.tick();
        trace!("Heartbeat {} lit={}", blinker.ticks(), blinker.is_lit());
    }
}
