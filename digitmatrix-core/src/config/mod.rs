//! Board configuration
//!
//! The firmware has no runtime configuration. Everything is fixed here at
//! compile time and checked once at startup.

pub mod board;

pub use board::{BoardConfig, ConfigError, PinConfig};

use crate::display::{BLUE, NUM_PIXELS};

/// WS2812 data line
pub const MATRIX_PIN: u8 = 7;

/// Red channel of the on-board RGB LED, used as heartbeat
pub const STATUS_LED_PIN: u8 = 13;

/// Button A (increment)
pub const BUTTON_A_PIN: u8 = 5;

/// Button B (decrement)
pub const BUTTON_B_PIN: u8 = 6;

/// Heartbeat toggle period in milliseconds
pub const HEARTBEAT_INTERVAL_MS: u64 = 100;

/// Presses closer than this to the last accepted press are bounce (µs)
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

/// BitDogLab board: Pico with a 5x5 WS2812 matrix and two buttons
pub const BITDOGLAB: BoardConfig = BoardConfig {
    matrix_pin: PinConfig::new(MATRIX_PIN),
    status_led_pin: PinConfig::new(STATUS_LED_PIN),
    button_a: PinConfig::with_pullup(BUTTON_A_PIN),
    button_b: PinConfig::with_pullup(BUTTON_B_PIN),
    num_pixels: NUM_PIXELS,
    heartbeat_interval_ms: HEARTBEAT_INTERVAL_MS,
    debounce_window_us: DEBOUNCE_WINDOW_US,
    color: BLUE,
};
