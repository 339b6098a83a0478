//! Board-agnostic core logic for the digit matrix firmware
//!
//! Everything here runs on the host as well as on the board:
//!
//! - Pixel sink trait and re-exported pin/clock traits
//! - Digit glyphs and the renderer
//! - Shared-window debouncer and the button controller
//! - Status LED heartbeat
//! - Compile-time board configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod heartbeat;
pub mod state;
pub mod traits;

pub use controller::DigitController;
pub use heartbeat::StatusBlinker;
