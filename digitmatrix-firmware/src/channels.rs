//! Inter-task communication and shared state
//!
//! Both button tasks feed one queue drained by the input task. The digit
//! and debounce timestamp live behind a critical-section mutex.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use digitmatrix_core::config::BITDOGLAB;
use digitmatrix_core::state::{ButtonPress, SharedDebouncer};

/// Channel capacity for button edges
const INPUT_CHANNEL_SIZE: usize = 8;

/// Timestamped edges from the button tasks
///
/// Senders use `try_send`: when full, the edge is dropped like a bounce.
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, ButtonPress, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Displayed digit and last accepted press time, debounced with the
/// board's window
pub static DIGIT_STATE: SharedDebouncer<CriticalSectionRawMutex> =
    SharedDebouncer::for_board(&BITDOGLAB);
