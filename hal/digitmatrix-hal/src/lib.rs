//! digitmatrix Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the digit display
//! logic is written against. Chip-specific HALs implement them, and host
//! tests implement them with plain mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (digitmatrix-firmware)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digitmatrix-core (display, input)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digitmatrix-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!         ┌───────────────────────┐
//!         │ digitmatrix-hal-rp2040│
//!         └───────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::MonotonicClock`] - Microsecond time source for debouncing

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::MonotonicClock;
pub use gpio::{InputPin, Level, OutputPin};
