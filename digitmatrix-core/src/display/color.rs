//! Display colors
//!
//! Colors are `smart_leds::RGB8`, the type the WS2812 driver consumes; the
//! driver handles GRB wire order. One color is used for every lit cell and
//! unlit cells are [`OFF`].

pub use smart_leds::RGB8;

/// All channels dark
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Full-intensity blue, the startup foreground color
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(OFF, RGB8::default());
        assert_eq!((BLUE.r, BLUE.g, BLUE.b), (0, 0, 255));
    }
}
