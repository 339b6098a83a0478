//! WS2812 matrix on one PIO state machine
//!
//! Wraps embassy's stock WS2812 program. A frame goes out by DMA, so
//! `write` yields to the executor until the last word is queued.

use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::Peri;

use digitmatrix_core::display::{Frame, NUM_PIXELS};
use digitmatrix_core::traits::PixelSink;

/// Pixel sink for the 5x5 matrix
pub struct MatrixDriver<'d, P: Instance, const S: usize> {
    inner: PioWs2812<'d, P, S, NUM_PIXELS>,
}

impl<'d, P: Instance, const S: usize> MatrixDriver<'d, P, S> {
    /// Load the WS2812 program and start the state machine on `pin`
    pub fn new(
        common: &mut Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = PioWs2812Program::new(common);
        Self {
            inner: PioWs2812::new(common, sm, dma, pin, &program),
        }
    }
}

impl<P: Instance, const S: usize> PixelSink for MatrixDriver<'_, P, S> {
    async fn write(&mut self, frame: &Frame) {
        self.inner.write(frame).await;
    }
}
