//! Button-to-display controller
//!
//! The single handler both buttons feed. It runs the shared debouncer and,
//! for accepted presses only, redraws the matrix. Discarded edges neither
//! change the digit nor touch the LEDs.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::display::DisplayRenderer;
use crate::state::{ButtonEvent, ButtonPress, Digit, EdgeOutcome, SharedDebouncer};
use crate::traits::{MonotonicClock, PixelSink};

pub struct DigitController<'a, M: RawMutex, S> {
    state: &'a SharedDebouncer<M>,
    renderer: DisplayRenderer<S>,
}

impl<'a, M: RawMutex, S: PixelSink> DigitController<'a, M, S> {
    pub fn new(state: &'a SharedDebouncer<M>, renderer: DisplayRenderer<S>) -> Self {
        Self { state, renderer }
    }

    /// Draw the current digit; called once at startup
    pub async fn start(&mut self) -> Digit {
        let digit = self.state.digit();
        self.renderer.render(digit).await;
        digit
    }

    /// Handle an edge that was timestamped when it was detected
    pub async fn on_press(&mut self, press: ButtonPress) -> EdgeOutcome {
        let outcome = self.state.on_press(press);
        // Lock already released: the frame write may take a while
        if let Some(digit) = outcome.render_digit() {
            self.renderer.render(digit).await;
        }
        outcome
    }

    /// Handle an edge now, reading the clock exactly once
    pub async fn on_button<C: MonotonicClock>(&mut self, event: ButtonEvent, clock: &C) -> EdgeOutcome {
        let now_us = clock.now_us();
        self.on_press(ButtonPress::new(event, now_us)).await
    }
}
