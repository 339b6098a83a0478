//! The displayed digit

/// Errors constructing a [`Digit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value above 9
    OutOfRange(u8),
}

/// A decimal digit in `0..=9`
///
/// Steps saturate at both ends; there is no wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(9);

    /// Create a digit, rejecting values above 9
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value > Self::MAX.0 {
            Err(DigitError::OutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into per-digit tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next digit, or `self` at 9
    pub const fn increment(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Previous digit, or `self` at 0
    pub const fn decrement(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    /// All digits in ascending order
    #[cfg(test)]
    pub(crate) fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(Digit::new(0), Ok(Digit::MIN));
        assert_eq!(Digit::new(9), Ok(Digit::MAX));
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
        assert_eq!(Digit::new(255), Err(DigitError::OutOfRange(255)));
    }

    #[test]
    fn test_steps_clamp() {
        assert_eq!(Digit::MAX.increment(), Digit::MAX);
        assert_eq!(Digit::MIN.decrement(), Digit::MIN);
        assert_eq!(Digit::MIN.increment().value(), 1);
        assert_eq!(Digit::MAX.decrement().value(), 8);
    }

    #[test]
    fn test_all_digits() {
        let mut expected = 0u8;
        for digit in Digit::all() {
            assert_eq!(digit.value(), expected);
            expected += 1;
        }
        assert_eq!(expected, 10);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Digit::default(), Digit::MIN);
    }
}
