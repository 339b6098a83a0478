//! Button events that drive the digit

use crate::config::{BUTTON_A_PIN, BUTTON_B_PIN};

/// A press on one of the two buttons
///
/// Both buttons feed the same handler; the variant says which way to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button A: step the digit up
    Increment,
    /// Button B: step the digit down
    Decrement,
}

impl ButtonEvent {
    /// Map the GPIO line that raised the edge to an event
    ///
    /// Returns `None` for lines that are not wired to a button.
    pub fn from_gpio(pin: u8) -> Option<Self> {
        match pin {
            BUTTON_A_PIN => Some(ButtonEvent::Increment),
            BUTTON_B_PIN => Some(ButtonEvent::Decrement),
            _ => None,
        }
    }
}

/// A raw edge stamped with the time it was seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress {
    pub event: ButtonEvent,
    /// Monotonic microseconds at edge detection
    pub at_us: u64,
}

impl ButtonPress {
    pub const fn new(event: ButtonEvent, at_us: u64) -> Self {
        Self { event, at_us }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_mapping() {
        assert_eq!(ButtonEvent::from_gpio(5), Some(ButtonEvent::Increment));
        assert_eq!(ButtonEvent::from_gpio(6), Some(ButtonEvent::Decrement));
        assert_eq!(ButtonEvent::from_gpio(7), None);
        assert_eq!(ButtonEvent::from_gpio(13), None);
    }

    #[test]
    fn test_board_buttons_map_both_ways() {
        assert_eq!(
            ButtonEvent::from_gpio(BUTTON_A_PIN),
            Some(ButtonEvent::Increment)
        );
        assert_eq!(
            ButtonEvent::from_gpio(BUTTON_B_PIN),
            Some(ButtonEvent::Decrement)
        );
    }
}
