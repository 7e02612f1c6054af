//! Logic - the four-valued element of a digital signal
//!
//! Every bit of a simulated hardware signal is a `Logic`: one of exactly
//! four states - `0`, `1`, unknown (`X`), or uninitialized/high-impedance
//! (`Z`).
//!
//! # Why four values?
//!
//! Two-valued logic cannot describe a signal that nobody has driven yet,
//! or a bus where two drivers disagree. HDL simulators model both:
//! - **Z**: nothing has driven the wire (uninitialized / high impedance)
//! - **X**: the value cannot be determined (conflict, or propagated Z)
//!
//! Using this enum instead of a raw byte prevents invalid states and lets
//! the truth tables live next to the type.
//!
//! # Example
//! ```
//! use quadsig::Logic;
//!
//! let one = Logic::try_from('h').unwrap();    // case-insensitive aliases
//! assert_eq!(one, Logic::One);
//!
//! // Four-valued truth table: 0 dominates AND regardless of X/Z
//! assert_eq!(Logic::Zero & Logic::HighImpedance, Logic::Zero);
//! assert_eq!(Logic::Unknown | Logic::One, Logic::One);
//! assert_eq!(!Logic::HighImpedance, Logic::Unknown);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{QuadsigError, Result};

/// A single four-valued logic bit - strictly {0, 1, X, Z}
///
/// Ordering and hashing are by state identity. The default state is
/// `HighImpedance` (`Z`): a freshly declared signal has not been driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Logic {
    /// Logic low
    Zero = 0,
    /// Logic high
    One = 1,
    /// Unknown / conflicting value (`X`)
    Unknown = 2,
    /// Uninitialized / high impedance (`Z`)
    #[default]
    HighImpedance = 3,
}

impl Logic {
    /// Parse a symbol character, returning None for characters that name
    /// no logic state.
    ///
    /// Accepts the usual HDL aliases, case-insensitively:
    /// - `0`, `l` -> [`Logic::Zero`]
    /// - `1`, `h` -> [`Logic::One`]
    /// - `x`, `w`, `u`, `-` -> [`Logic::Unknown`]
    /// - `z` -> [`Logic::HighImpedance`]
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' | 'l' | 'L' => Some(Self::Zero),
            '1' | 'h' | 'H' => Some(Self::One),
            'x' | 'X' | 'w' | 'W' | 'u' | 'U' | '-' => Some(Self::Unknown),
            'z' | 'Z' => Some(Self::HighImpedance),
            _ => None,
        }
    }

    /// The canonical symbol for this state: `'0'`, `'1'`, `'X'`, or `'Z'`.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Unknown => 'X',
            Self::HighImpedance => 'Z',
        }
    }

    /// Is this a binary (0 or 1) state?
    #[inline]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }

    /// Numeric bit value. Fails for X and Z.
    #[inline]
    pub fn to_bit(self) -> Result<u8> {
        match self {
            Self::Zero => Ok(0),
            Self::One => Ok(1),
            _ => Err(QuadsigError::Unresolvable),
        }
    }

    /// Boolean view. Fails for X and Z.
    #[inline]
    pub fn to_bool(self) -> Result<bool> {
        Ok(self.to_bit()? != 0)
    }
}

impl From<bool> for Logic {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl TryFrom<char> for Logic {
    type Error = QuadsigError;

    fn try_from(symbol: char) -> Result<Self> {
        Logic::from_symbol(symbol).ok_or(QuadsigError::InvalidSymbol(symbol))
    }
}

impl TryFrom<u8> for Logic {
    type Error = QuadsigError;

    fn try_from(bit: u8) -> Result<Self> {
        match bit {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(QuadsigError::InvalidBit(other)),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Four-valued truth tables
//
// 0 dominates AND, 1 dominates OR; every other combination involving a
// non-binary operand resolves to X. Complement maps Z to X.
// =============================================================================

impl BitAnd for Logic {
    type Output = Logic;

    #[inline]
    fn bitand(self, rhs: Logic) -> Logic {
        match (self, rhs) {
            (Logic::Zero, _) | (_, Logic::Zero) => Logic::Zero,
            (Logic::One, Logic::One) => Logic::One,
            _ => Logic::Unknown,
        }
    }
}

impl BitOr for Logic {
    type Output = Logic;

    #[inline]
    fn bitor(self, rhs: Logic) -> Logic {
        match (self, rhs) {
            (Logic::One, _) | (_, Logic::One) => Logic::One,
            (Logic::Zero, Logic::Zero) => Logic::Zero,
            _ => Logic::Unknown,
        }
    }
}

impl BitXor for Logic {
    type Output = Logic;

    #[inline]
    fn bitxor(self, rhs: Logic) -> Logic {
        match (self, rhs) {
            (Logic::Zero, Logic::Zero) | (Logic::One, Logic::One) => Logic::Zero,
            (Logic::Zero, Logic::One) | (Logic::One, Logic::Zero) => Logic::One,
            _ => Logic::Unknown,
        }
    }
}

impl Not for Logic {
    type Output = Logic;

    #[inline]
    fn not(self) -> Logic {
        match self {
            Logic::Zero => Logic::One,
            Logic::One => Logic::Zero,
            _ => Logic::Unknown,
        }
    }
}
