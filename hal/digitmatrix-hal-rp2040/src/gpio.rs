//! GPIO pin wrappers
//!
//! Adapts embassy-rp pins to the `digitmatrix-hal` traits.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;

use digitmatrix_core::config::PinConfig;
use digitmatrix_hal::{InputPin, OutputPin};

/// Push-pull output implementing [`OutputPin`]
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    /// Configure as output, driven low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}

/// Button input implementing [`InputPin`], with async edge waits
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Configure as input with the pull given by `config`
    pub fn new(pin: Peri<'d, impl Pin>, config: PinConfig) -> Self {
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Self {
            pin: Input::new(pin, pull),
        }
    }

    /// Wait for a high-to-low transition (press on a pulled-up button)
    pub async fn wait_for_press(&mut self) {
        self.pin.wait_for_falling_edge().await;
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
