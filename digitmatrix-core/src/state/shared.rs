//! Debouncer state shared between the edge handler and readers
//!
//! Every access goes through a blocking mutex, so with
//! `CriticalSectionRawMutex` reads and updates run with interrupts masked.
//! Keep the closures short: rendering happens outside the lock.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::digit::Digit;
use super::events::ButtonPress;
use super::machine::{EdgeOutcome, InputDebouncer};
use crate::config::BoardConfig;

/// [`InputDebouncer`] behind a blocking mutex
pub struct SharedDebouncer<M: RawMutex> {
    inner: Mutex<M, RefCell<InputDebouncer>>,
}

impl<M: RawMutex> SharedDebouncer<M> {
    /// Digit 0 with the board's debounce window
    pub const fn for_board(board: &BoardConfig) -> Self {
        Self::from_debouncer(InputDebouncer::with_window(board.debounce_window_us))
    }

    pub const fn from_debouncer(debouncer: InputDebouncer) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(debouncer)),
        }
    }

    /// Apply one timestamped edge under the lock
    pub fn on_press(&self, press: ButtonPress) -> EdgeOutcome {
        self.inner.lock(|cell| cell.borrow_mut().on_press(press))
    }

    /// Current digit
    pub fn digit(&self) -> Digit {
        self.inner.lock(|cell| cell.borrow().digit())
    }

    /// Copy of the full state, for logging
    pub fn snapshot(&self) -> InputDebouncer {
        self.inner.lock(|cell| cell.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BITDOGLAB;
    use crate::state::ButtonEvent;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    const MS: u64 = 1_000;

    #[test]
    fn test_updates_visible_to_readers() {
        let shared: SharedDebouncer<NoopRawMutex> = SharedDebouncer::for_board(&BITDOGLAB);
        assert_eq!(shared.digit(), Digit::MIN);

        let outcome = shared.on_press(ButtonPress::new(ButtonEvent::Increment, 500_000));
        assert!(outcome.is_accepted());
        assert_eq!(shared.digit().value(), 1);

        let snap = shared.snapshot();
        assert_eq!(snap.last_event_us(), 500_000);
        assert_eq!(snap.accepted_count(), 1);
    }

    #[test]
    fn test_board_window_reaches_debouncer() {
        let shared: SharedDebouncer<NoopRawMutex> = SharedDebouncer::for_board(&BITDOGLAB);
        assert_eq!(shared.snapshot().window_us(), BITDOGLAB.debounce_window_us);

        let mut board = BITDOGLAB;
        board.debounce_window_us = 10 * MS;
        let shared: SharedDebouncer<NoopRawMutex> = SharedDebouncer::for_board(&board);
        assert_eq!(shared.snapshot().window_us(), 10 * MS);

        // 50 ms apart: bounce with the stock window, a new press with 10 ms
        let first = ButtonPress::new(ButtonEvent::Increment, 1_000 * MS);
        let second = ButtonPress::new(ButtonEvent::Increment, 1_050 * MS);
        assert!(shared.on_press(first).is_accepted());
        assert!(shared.on_press(second).is_accepted());
        assert_eq!(shared.digit().value(), 2);
    }

    #[test]
    fn test_from_debouncer() {
        let start = InputDebouncer::starting_at(Digit::MAX);
        let shared: SharedDebouncer<NoopRawMutex> = SharedDebouncer::from_debouncer(start);
        assert_eq!(shared.digit(), Digit::MAX);
    }
}
