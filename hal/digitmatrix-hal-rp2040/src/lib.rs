//! RP2040-specific HAL for the digit matrix firmware
//!
//! This crate provides RP2040 implementations of the `digitmatrix-hal`
//! traits and the `digitmatrix-core` pixel sink:
//!
//! - GPIO pin wrappers
//! - WS2812 matrix driver over embassy's PIO program
//! - Microsecond clock over the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;
pub mod ws2812;

pub use clock::EmbassyClock;
pub use gpio::{GpioInput, GpioOutput};
pub use ws2812::MatrixDriver;
