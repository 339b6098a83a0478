//! Digit renderer
//!
//! Paints a whole digit in one pass: 25 colors, one per LED, in chain
//! order. Lit cells get the foreground color, the rest are sent dark.

use super::color::{OFF, RGB8};
use super::glyph::{glyph, NUM_PIXELS};
use crate::state::Digit;
use crate::traits::PixelSink;

/// One full matrix worth of colors in chain order
pub type Frame = [RGB8; NUM_PIXELS];

/// Build the frame for a digit without touching hardware
pub fn frame(digit: Digit, color: RGB8) -> Frame {
    let mask = glyph(digit);
    let mut out = [OFF; NUM_PIXELS];
    for (slot, &lit) in out.iter_mut().zip(mask.iter()) {
        if lit {
            *slot = color;
        }
    }
    out
}

/// Renders digits onto a pixel chain
pub struct DisplayRenderer<S> {
    sink: S,
    color: RGB8,
}

impl<S: PixelSink> DisplayRenderer<S> {
    pub fn new(sink: S, color: RGB8) -> Self {
        Self { sink, color }
    }

    /// Paint `digit` across the full matrix
    ///
    /// Always writes exactly [`NUM_PIXELS`] colors.
    pub async fn render(&mut self, digit: Digit) {
        let frame = frame(digit, self.color);
        self.sink.write(&frame).await;
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::display::color::BLUE;
    use embassy_futures::block_on;

    /// Records every frame it is sent
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub frames: Vec<Frame>,
    }

    impl RecordingSink {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn last(&self) -> Option<&Frame> {
            self.frames.last()
        }

        pub(crate) fn count(&self) -> usize {
            self.frames.len()
        }
    }

    impl PixelSink for RecordingSink {
        async fn write(&mut self, frame: &Frame) {
            self.frames.push(*frame);
        }
    }

    #[test]
    fn test_render_emits_mask_for_every_digit() {
        let color = RGB8 {
            r: 10,
            g: 20,
            b: 30,
        };
        let mut renderer = DisplayRenderer::new(RecordingSink::new(), color);

        for digit in Digit::all() {
            block_on(renderer.render(digit));

            let sent = renderer.sink().last().unwrap();
            assert_eq!(sent.len(), NUM_PIXELS);
            for (i, (&lit, &got)) in glyph(digit).iter().zip(sent.iter()).enumerate() {
                let expected = if lit { color } else { OFF };
                assert_eq!(got, expected, "digit {} cell {}", digit.value(), i);
            }
        }
        assert_eq!(renderer.sink().count(), 10);
    }

    #[test]
    fn test_render_matches_frame() {
        let mut renderer = DisplayRenderer::new(RecordingSink::new(), BLUE);
        let seven = Digit::new(7).unwrap();
        block_on(renderer.render(seven));
        assert_eq!(renderer.sink().last(), Some(&frame(seven, BLUE)));
    }

    #[test]
    fn test_one_frame_per_render() {
        let mut renderer = DisplayRenderer::new(RecordingSink::new(), BLUE);
        block_on(renderer.render(Digit::MIN));
        block_on(renderer.render(Digit::MIN));
        assert_eq!(renderer.sink().count(), 2);
    }

    #[test]
    fn test_unlit_cells_are_dark() {
        let one = frame(Digit::new(1).unwrap(), BLUE);
        let dark = one.iter().filter(|&&c| c == OFF).count();
        let lit = one.iter().filter(|&&c| c == BLUE).count();
        assert_eq!(dark + lit, NUM_PIXELS);
        assert!(lit > 0 && dark > 0);
    }
}
