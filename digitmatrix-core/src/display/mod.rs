//! 5x5 LED matrix display
//!
//! - `color`: Foreground and off colors
//! - `glyph`: Per-digit lit-cell masks
//! - `renderer`: Paints a digit onto a [`PixelSink`](crate::traits::PixelSink)

pub mod color;
pub mod glyph;
pub mod renderer;

pub use color::{BLUE, OFF, RGB8};
pub use glyph::{glyph, Glyph, MATRIX_HEIGHT, MATRIX_WIDTH, NUM_PIXELS};
pub use renderer::{frame, DisplayRenderer, Frame};
