//! digitmatrix - single digit on a 5x5 LED matrix
//!
//! Main firmware binary for the BitDogLab (RP2040) board. Buttons A and B
//! step the displayed digit up and down; the red LED blinks as a heartbeat.
//! All behavior lives in tasks; `main` only wires them up.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use {defmt_rtt as _, panic_probe as _};

use digitmatrix_core::config::BITDOGLAB;
use digitmatrix_core::display::DisplayRenderer;
use digitmatrix_core::{DigitController, StatusBlinker};
use digitmatrix_hal_rp2040::{GpioInput, GpioOutput, MatrixDriver};

use crate::channels::DIGIT_STATE;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("digitmatrix firmware starting...");

    let board = BITDOGLAB;
    if let Err(e) = board.validate() {
        error!("Invalid board config: {}", e);
        panic!("board config");
    }
    info!("Pin map OK");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Peripheral handles below must match the BITDOGLAB pin numbers
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let matrix = MatrixDriver::new(&mut common, sm0, p.DMA_CH0, p.PIN_7);
    info!(
        "WS2812 on GPIO{}: {} pixels",
        board.matrix_pin.pin, board.num_pixels
    );

    let mut controller = DigitController::new(&DIGIT_STATE, DisplayRenderer::new(matrix, board.color));
    let initial = controller.start().await;
    info!("Showing digit {}", initial.value());

    let button_a = GpioInput::new(p.PIN_5, board.button_a);
    let button_b = GpioInput::new(p.PIN_6, board.button_b);
    let blinker = StatusBlinker::new(GpioOutput::new(p.PIN_13));

    info!("Spawning tasks...");
    spawner.spawn(tasks::input_task(controller)).unwrap();
    spawner
        .spawn(tasks::button_task(button_a, board.button_a.pin))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b, board.button_b.pin))
        .unwrap();
    spawner
        .spawn(tasks::heartbeat_task(blinker, board.heartbeat_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Idle forever; `common` stays alive with the loaded program
    core::future::pending::<()>().await;
}
