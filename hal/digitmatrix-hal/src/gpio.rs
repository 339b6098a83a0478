//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations drive the physical pin and must be able to report the
/// level they are currently driving, since toggling reads it back.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Invert the driven level
    ///
    /// The current level is read back from the pin, so no shadow copy of
    /// the output state is needed.
    fn toggle(&mut self) {
        let high = self.is_set_high();
        self.set_state(!high);
    }

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Current level as a [`Level`]
    fn level(&self) -> Level {
        Level::from(self.is_high())
    }
}

/// Logic level of a pin, for logging and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_toggle_reads_back_level() {
        let mut pin = MockPin { high: false, writes: 0 };

        pin.toggle();
        assert!(pin.is_set_high());

        pin.toggle();
        assert!(pin.is_set_low());
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn test_toggle_follows_external_writes() {
        let mut pin = MockPin { high: false, writes: 0 };

        // Someone else drove the pin high; toggle must honor that
        pin.set_high();
        pin.toggle();
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockPin { high: false, writes: 0 };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_input_default_is_low() {
        let pin = MockPin { high: true, writes: 0 };
        assert!(!pin.is_low());
        assert_eq!(pin.level(), Level::High);
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
    }
}
