//! LogicRange - arbitrary-bound, direction-tagged vector indexing
//!
//! HDL signals are not zero-based arrays: a bus may be declared
//! `[31 downto 0]`, `[1 to 8]`, or anything in between. `LogicRange`
//! captures that declaration - two bounds plus a direction - and owns the
//! translation from a logical position to a zero-based storage offset.
//!
//! The range is a labeling scheme, never a storage transform: element
//! storage stays most-significant-first regardless of direction.
//!
//! # Example
//! ```
//! use quadsig::{Direction, LogicRange};
//!
//! let bus = LogicRange::descending(7, 0);
//! assert_eq!(bus.len(), 8);
//! assert_eq!(bus.offset_of(7), Some(0));   // MSB sits at storage offset 0
//! assert_eq!(bus.offset_of(0), Some(7));
//!
//! let rev = bus.reverse();
//! assert_eq!(rev.direction(), Direction::Ascending);
//! assert_eq!(rev.offset_of(0), Some(0));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a [`LogicRange`]: which bound is counted toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Positions increase from `left` to `right` (`to` in VHDL terms)
    Ascending,
    /// Positions decrease from `left` to `right` (`downto`)
    Descending,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// An immutable indexing scheme: `(left, right)` bounds plus a direction.
///
/// Bounds are arbitrary `i32` values, not necessarily zero-based. A range
/// whose bounds run against its direction (e.g. descending from 0 to 3)
/// is empty, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicRange {
    left: i32,
    right: i32,
    direction: Direction,
}

impl LogicRange {
    /// Create a range from explicit bounds and direction.
    #[inline]
    pub const fn new(left: i32, direction: Direction, right: i32) -> Self {
        Self {
            left,
            right,
            direction,
        }
    }

    /// An ascending range: `left to right`.
    #[inline]
    pub const fn ascending(left: i32, right: i32) -> Self {
        Self::new(left, Direction::Ascending, right)
    }

    /// A descending range: `left downto right`.
    #[inline]
    pub const fn descending(left: i32, right: i32) -> Self {
        Self::new(left, Direction::Descending, right)
    }

    /// The bound positions are counted from.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// The bound positions are counted toward.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.right
    }

    /// Direction tag.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of positions in the range. Null ranges have length 0.
    #[inline]
    pub const fn len(&self) -> usize {
        let span = match self.direction {
            Direction::Ascending => self.right as i64 - self.left as i64,
            Direction::Descending => self.left as i64 - self.right as i64,
        };
        if span < 0 {
            0
        } else {
            span as usize + 1
        }
    }

    /// Is this a null range?
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Does `position` fall within the range's bounds?
    #[inline]
    pub const fn contains(&self, position: i32) -> bool {
        match self.direction {
            Direction::Ascending => self.left <= position && position <= self.right,
            Direction::Descending => self.right <= position && position <= self.left,
        }
    }

    /// Translate a range position to a zero-based storage offset.
    ///
    /// Returns None when `position` lies outside the range. Offset 0 is
    /// always the `left` bound (the most significant element).
    #[inline]
    pub fn offset_of(&self, position: i32) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let offset = match self.direction {
            Direction::Ascending => position as i64 - self.left as i64,
            Direction::Descending => self.left as i64 - position as i64,
        };
        Some(offset as usize)
    }

    /// The same bounds swapped, with the opposite direction.
    ///
    /// `(7 downto 0).reverse()` is `(0 to 7)`: the same set of positions,
    /// walked in the opposite order.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            direction: self.direction.reverse(),
        }
    }

    /// Iterate positions in declaration order, `left` first.
    pub fn iter(&self) -> Positions {
        Positions {
            next: self.left,
            remaining: self.len(),
            step: match self.direction {
                Direction::Ascending => 1,
                Direction::Descending => -1,
            },
        }
    }
}

/// Iterator over the positions of a [`LogicRange`], `left` bound first.
#[derive(Clone, Debug)]
pub struct Positions {
    next: i32,
    remaining: usize,
    step: i32,
}

impl Iterator for Positions {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.next;
        self.next = self.next.wrapping_add(self.step);
        self.remaining -= 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl IntoIterator for LogicRange {
    type Item = i32;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.iter()
    }
}

impl IntoIterator for &LogicRange {
    type Item = i32;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.iter()
    }
}

impl fmt::Display for LogicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Ascending => write!(f, "({} to {})", self.left, self.right),
            Direction::Descending => write!(f, "({} downto {})", self.left, self.right),
        }
    }
}

impl fmt::Debug for LogicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogicRange({}, {:?}, {})",
            self.left, self.direction, self.right
        )
    }
}
