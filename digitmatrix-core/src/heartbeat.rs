//! Status LED heartbeat
//!
//! Toggles one output every tick. The firmware drives `tick` from a 100 ms
//! ticker, so the LED blinks at 5 Hz while the executor is alive. It shares
//! no state with the button path.

use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::traits::OutputPin;

pub struct StatusBlinker<P> {
    pin: P,
    ticks: u32,
}

impl<P: OutputPin> StatusBlinker<P> {
    /// Wrap the LED pin, leaving its level as configured
    pub fn new(pin: P) -> Self {
        Self { pin, ticks: 0 }
    }

    /// Invert the LED
    ///
    /// The break type is uninhabited: the blinker never asks to stop, and
    /// callers can destructure the result irrefutably.
    pub fn tick(&mut self) -> ControlFlow<Infallible> {
        self.pin.toggle();
        self.ticks = self.ticks.wrapping_add(1);
        ControlFlow::Continue(())
    }

    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Toggles since construction
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
