//! Sudoku digit representation.

use std::{
    fmt::{self, Display},
    num::NonZeroU8,
};

/// A Sudoku digit in the range 1-9.
///
/// The wrapped value is guaranteed to be in range at construction time, so a
/// `Digit` never needs re-validation. `Option<Digit>` occupies a single byte
/// thanks to the [`NonZeroU8`] niche, which keeps 81-cell grids compact.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Fallible conversion from untrusted input
/// let digit = Digit::try_from(7_u8).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert!(Digit::try_from(0_u8).is_err());
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(NonZeroU8);

/// Error returned when converting an out-of-range value into a [`Digit`].
///
/// The offending value is reported so the caller can re-prompt or log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit must be between 1 and 9, got {value}")]
pub struct DigitOutOfRange {
    /// The rejected value.
    pub value: u8,
}

macro_rules! digit_const {
    ($($name:ident = $value:literal),* $(,)?) => {
        $(
            #[doc = concat!("The digit ", stringify!($value), ".")]
            pub const $name: Self = match NonZeroU8::new($value) {
                Some(value) => Self(value),
                None => unreachable!(),
            };
        )*
    };
}

impl Digit {
    digit_const! {
        D1 = 1, D2 = 2, D3 = 3, D4 = 4, D5 = 5, D6 = 6, D7 = 7, D8 = 8, D9 = 9,
    }

    /// Array containing all digits from 1 to 9 in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[8], Digit::D9);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Returns the numeric value of this digit (1-9).
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D9.value(), 9);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match NonZeroU8::new(value) {
            Some(v) if value <= 9 => Ok(Self(v)),
            _ => Err(DigitOutOfRange { value }),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
