//! Board pin map and validation

use crate::display::{NUM_PIXELS, RGB8};

/// Number of GPIO lines on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional pull-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Plain pin, no pull
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Pin with pull-up enabled (idle high, pressed low)
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// Board configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number outside 0-29
    InvalidPin(u8),
    /// Two roles assigned the same pin
    PinConflict(u8),
    /// Chain length does not match the glyph size
    PixelCount(usize),
    /// A timing value of zero
    ZeroInterval,
}

/// Complete board description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// WS2812 data line
    pub matrix_pin: PinConfig,
    /// Heartbeat LED
    pub status_led_pin: PinConfig,
    /// Increment button
    pub button_a: PinConfig,
    /// Decrement button
    pub button_b: PinConfig,
    /// LEDs in the chain
    pub num_pixels: usize,
    /// Heartbeat toggle period
    pub heartbeat_interval_ms: u64,
    /// Minimum gap between accepted presses
    pub debounce_window_us: u64,
    /// Foreground color for lit cells
    pub color: RGB8,
}

impl BoardConfig {
    /// Pins in role order: matrix, status LED, button A, button B
    pub const fn pins(&self) -> [PinConfig; 4] {
        [
            self.matrix_pin,
            self.status_led_pin,
            self.button_a,
            self.button_b,
        ]
    }

    /// Check pin range, pin uniqueness, chain length and timings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.pins();
        for (i, p) in pins.iter().enumerate() {
            if p.pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(p.pin));
            }
            if pins[..i].iter().any(|other| other.pin == p.pin) {
                return Err(ConfigError::PinConflict(p.pin));
            }
        }

        if self.num_pixels != NUM_PIXELS {
            return Err(ConfigError::PixelCount(self.num_pixels));
        }

        if self.heartbeat_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BITDOGLAB;

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::new(7);
        assert_eq!(pin.pin, 7);
        assert!(!pin.pull_up);

        let pullup = PinConfig::with_pullup(5);
        assert!(pullup.pull_up);
    }

    #[test]
    fn test_default_board_is_valid() {
        assert_eq!(BITDOGLAB.validate(), Ok(()));
    }

    #[test]
    fn test_buttons_pulled_up() {
        assert!(BITDOGLAB.button_a.pull_up);
        assert!(BITDOGLAB.button_b.pull_up);
        assert!(!BITDOGLAB.status_led_pin.pull_up);
    }

    #[test]
    fn test_pin_conflict() {
        let mut board = BITDOGLAB;
        board.button_b = PinConfig::with_pullup(board.button_a.pin);
        assert_eq!(board.validate(), Err(ConfigError::PinConflict(5)));
    }

    #[test]
    fn test_invalid_pin() {
        let mut board = BITDOGLAB;
        board.status_led_pin = PinConfig::new(30);
        assert_eq!(board.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_pixel_count_must_match_glyphs() {
        let mut board = BITDOGLAB;
        board.num_pixels = 64;
        assert_eq!(board.validate(), Err(ConfigError::PixelCount(64)));
    }

    #[test]
    fn test_zero_heartbeat() {
        let mut board = BITDOGLAB;
        board.heartbeat_interval_ms = 0;
        assert_eq!(board.validate(), Err(ConfigError::ZeroInterval));
    }
}
