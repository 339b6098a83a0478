//! Single input handler
//!
//! Drains the edge queue in arrival order. Both buttons go through here so
//! they share one debounce window.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use digitmatrix_core::state::EdgeOutcome;
use digitmatrix_core::DigitController;
use digitmatrix_hal_rp2040::MatrixDriver;

use crate::channels::{DIGIT_STATE, INPUT_CHANNEL};

/// Controller wired to the shared state and the matrix on PIO0 SM0
pub type MatrixController =
    DigitController<'static, CriticalSectionRawMutex, MatrixDriver<'static, PIO0, 0>>;

#[embassy_executor::task]
pub async fn input_task(mut controller: MatrixController) {
    info!("Input task started");

    loop {
        let press = INPUT_CHANNEL.receive().await;

        match controller.on_press(press).await {
            EdgeOutcome::Accepted { digit, changed } => {
                let stats = DIGIT_STATE.snapshot();
                debug!(
                    "{} accepted: digit {} (changed={}, {} accepted / {} discarded)",
                    press.event,
                    digit.value(),
                    changed,
                    stats.accepted_count(),
                    stats.discarded_count()
                );
            }
            EdgeOutcome::Discarded { elapsed_us } => {
                trace!("{} discarded: {} us since last press", press.event, elapsed_us);
            }
        }
    }
}
