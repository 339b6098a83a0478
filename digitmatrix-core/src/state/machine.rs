//! Debounced digit state machine
//!
//! Holds the displayed digit and the time of the last accepted press. Both
//! buttons share one debounce window: any accepted press quiets the line for
//! both of them.

use super::digit::Digit;
use super::events::{ButtonEvent, ButtonPress};
use crate::config::DEBOUNCE_WINDOW_US;

/// Result of feeding one raw edge to the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge accepted; the display must be redrawn with `digit`
    ///
    /// `changed` is false when the press hit the 0 or 9 clamp.
    Accepted { digit: Digit, changed: bool },
    /// Edge fell inside the debounce window and was dropped
    Discarded { elapsed_us: u64 },
}

impl EdgeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EdgeOutcome::Accepted { .. })
    }

    /// Digit to render, if any
    pub fn render_digit(&self) -> Option<Digit> {
        match *self {
            EdgeOutcome::Accepted { digit, .. } => Some(digit),
            EdgeOutcome::Discarded { .. } => None,
        }
    }
}

/// Debounce state shared by both buttons
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    digit: Digit,
    /// Timestamp of the last accepted edge (µs)
    last_event_us: u64,
    window_us: u64,
    accepted: u32,
    discarded: u32,
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDebouncer {
    /// Digit 0, no accepted edge yet, standard 200 ms window
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW_US)
    }

    pub const fn with_window(window_us: u64) -> Self {
        Self {
            digit: Digit::MIN,
            last_event_us: 0,
            window_us,
            accepted: 0,
            discarded: 0,
        }
    }

    #[cfg(test)]
    pub(crate) const fn starting_at(digit: Digit) -> Self {
        Self {
            digit,
            last_event_us: 0,
            window_us: DEBOUNCE_WINDOW_US,
            accepted: 0,
            discarded: 0,
        }
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }

    pub fn last_event_us(&self) -> u64 {
        self.last_event_us
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }

    /// Number of accepted edges since boot
    pub fn accepted_count(&self) -> u32 {
        self.accepted
    }

    /// Number of edges dropped as bounce
    pub fn discarded_count(&self) -> u32 {
        self.discarded
    }

    /// Feed one raw edge observed at `now_us`
    ///
    /// An edge is dropped when `now_us - last_accepted <= window`. Since the
    /// last accepted time starts at 0, edges inside the first window after
    /// boot are dropped too.
    pub fn on_edge(&mut self, event: ButtonEvent, now_us: u64) -> EdgeOutcome {
        let elapsed_us = now_us.wrapping_sub(self.last_event_us);
        if elapsed_us <= self.window_us {
            self.discarded = self.discarded.wrapping_add(1);
            return EdgeOutcome::Discarded { elapsed_us };
        }

        self.last_event_us = now_us;
        self.accepted = self.accepted.wrapping_add(1);

        let next = match event {
            ButtonEvent::Increment => self.digit.increment(),
            ButtonEvent::Decrement => self.digit.decrement(),
        };
        let changed = next != self.digit;
        self.digit = next;

        EdgeOutcome::Accepted {
            digit: next,
            changed,
        }
    }

    pub fn on_press(&mut self, press: ButtonPress) -> EdgeOutcome {
        self.on_edge(press.event, press.at_us)
    }
}
