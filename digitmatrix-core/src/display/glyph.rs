//! Digit glyph table
//!
//! Each glyph is a 25-cell mask over the 5x5 matrix in the order the cells
//! are clocked out along the LED chain. The masks already account for the
//! board's chain wiring, which is why some digits look mirrored when read
//! as plain row-major text.

use crate::state::Digit;

/// Matrix width in cells
pub const MATRIX_WIDTH: usize = 5;

/// Matrix height in cells
pub const MATRIX_HEIGHT: usize = 5;

/// Number of LEDs in the chain
pub const NUM_PIXELS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = 10;

/// Lit/unlit mask for one digit
pub type Glyph = [bool; NUM_PIXELS];

const O: bool = false;
const X: bool = true;

#[rustfmt::skip]
static GLYPHS: [Glyph; GLYPH_COUNT] = [
    // 0
    [
        O, O, X, O, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, O, X, O, O,
    ],
    // 1
    [
        O, X, X, X, O,
        O, O, X, O, O,
        O, O, X, O, O,
        O, X, X, O, O,
        O, O, X, O, O,
    ],
    // 2
    [
        O, X, X, X, O,
        O, X, O, O, O,
        O, O, X, O, O,
        O, X, O, X, O,
        O, O, X, O, O,
    ],
    // 3
    [
        O, O, X, X, O,
        O, O, O, X, O,
        O, X, O, O, O,
        O, O, X, O, O,
        O, X, X, X, O,
    ],
    // 4
    [
        O, X, X, X, O,
        O, O, X, O, O,
        O, X, X, X, X,
        O, X, X, O, O,
        O, O, X, O, O,
    ],
    // 5
    [
        O, O, X, X, O,
        O, O, O, X, O,
        O, X, O, O, O,
        O, X, X, O, O,
        O, X, X, X, O,
    ],
    // 6
    [
        O, O, X, O, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, X, O, O, O,
        O, O, X, O, O,
    ],
    // 7
    [
        O, O, O, X, O,
        O, O, X, O, O,
        O, O, O, O, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ],
    // 8
    [
        O, O, X, O, O,
        O, X, O, X, O,
        O, O, X, O, O,
        O, X, O, X, O,
        O, O, X, O, O,
    ],
    // 9
    [
        O, O, X, O, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, O, X, O, O,
    ],
];

/// Look up the glyph for a digit
///
/// Infallible: [`Digit`] can only hold 0-9.
pub fn glyph(digit: Digit) -> &'static Glyph {
    &GLYPHS[digit.index()]
}
