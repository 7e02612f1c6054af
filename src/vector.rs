//! LogicVector - fixed-size, arbitrarily-indexed vector of logic bits
//!
//! The workhorse of the crate: a sequence of [`Logic`] elements labeled by
//! a [`LogicRange`]. Storage is always most-significant-first; the range
//! only decides how callers address positions.
//!
//! # Construction
//!
//! A vector is built from exactly one of: a range alone (default fill),
//! an integer (minimal-width or sign-extended into an explicit range), or
//! a sequence of elements / a symbol string.
//!
//! ```
//! use quadsig::{LogicRange, LogicVector};
//!
//! let from_str: LogicVector = "01XZ".parse().unwrap();
//! assert_eq!(from_str.range(), LogicRange::descending(3, 0));
//!
//! let from_int = LogicVector::from_uint(0xA);
//! assert_eq!(from_int.binstr(), "1010");
//!
//! // negative values sign-extend into the supplied range
//! let signed = LogicVector::from_int_sized(-4, LogicRange::ascending(0, 3)).unwrap();
//! assert_eq!(signed.binstr(), "1100");
//!
//! let blank = LogicVector::filled(LogicRange::descending(3, 0));
//! assert_eq!(blank.binstr(), "ZZZZ");
//! ```
//!
//! # Views
//!
//! One canonical element sequence, several projections. Integer views
//! fail on X/Z bits; the symbol string never does.
//!
//! ```
//! use quadsig::LogicVector;
//!
//! let v: LogicVector = "1010".parse().unwrap();
//! assert_eq!(v.binstr(), "1010");
//! assert_eq!(v.to_unsigned().unwrap(), 10);
//! assert_eq!(v.to_signed().unwrap(), -6);
//! assert!(v.is_resolvable());
//! ```

use std::fmt;
use std::ops::{Index, Not};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{QuadsigError, Result};
use crate::logic::Logic;
use crate::range::{Direction, LogicRange};

/// A comparison operand for [`LogicVector::matches`]: the three value
/// families a vector promotes for equality.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// Compare against the unsigned integer view
    Integer(u128),
    /// Compare against a symbol string, re-parsed as a vector
    Text(&'a str),
    /// Compare symbol-by-symbol against another vector
    Vector(&'a LogicVector),
}

/// Fixed-size, arbitrarily-indexed vector of four-valued logic bits.
///
/// Structure (length and range) is fixed at construction; content is
/// mutable through [`set`](Self::set) and [`set_slice`](Self::set_slice).
/// Every operator returns a brand-new vector, never an aliased view.
#[derive(Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLogicVector"))]
pub struct LogicVector {
    /// Most-significant-first, regardless of range direction
    elements: Vec<Logic>,
    /// Caller-facing indexing scheme; len(range) == len(elements) always
    range: LogicRange,
}

/// Deserialization surrogate: untrusted input goes through the same
/// length check as every other construction path.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLogicVector {
    elements: Vec<Logic>,
    range: LogicRange,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLogicVector> for LogicVector {
    type Error = QuadsigError;

    fn try_from(raw: RawLogicVector) -> Result<Self> {
        Self::from_elements_sized(raw.elements, raw.range)
    }
}

/// Bits needed for the unsigned representation of `value` (at least 1).
#[inline]
fn unsigned_width(value: u128) -> usize {
    (128 - value.leading_zeros()).max(1) as usize
}

/// Bits needed for the two's-complement representation of `value`.
///
/// For negative values this is the bit length of `value + 1` plus a sign
/// bit, so -1 needs 1 bit, -4 needs 3 bits.
#[inline]
fn signed_width(value: i128) -> usize {
    if value < 0 {
        let magnitude = (value + 1).unsigned_abs();
        (128 - magnitude.leading_zeros()) as usize + 1
    } else {
        unsigned_width(value as u128)
    }
}

fn encode_uint(value: u128, width: usize) -> Vec<Logic> {
    (0..width)
        .rev()
        .map(|bit| {
            let set = value.checked_shr(bit as u32).map_or(0, |v| v & 1) != 0;
            Logic::from(set)
        })
        .collect()
}

fn encode_int(value: i128, width: usize) -> Vec<Logic> {
    (0..width)
        .rev()
        .map(|bit| {
            // beyond 128 bits the sign repeats
            let set = if bit >= 128 {
                value < 0
            } else {
                (value >> bit.min(127)) & 1 != 0
            };
            Logic::from(set)
        })
        .collect()
}

impl LogicVector {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A vector of `range.len()` uninitialized (`Z`) elements.
    pub fn filled(range: LogicRange) -> Self {
        Self {
            elements: vec![Logic::default(); range.len()],
            range,
        }
    }

    /// Build from elements in most-significant-first order, synthesizing a
    /// zero-based descending range of matching length.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Logic>,
    {
        let elements: Vec<Logic> = elements.into_iter().collect();
        let range = LogicRange::descending(elements.len() as i32 - 1, 0);
        Self { elements, range }
    }

    /// Build from elements with an explicit range. Fails unless the
    /// element count equals the range length - never truncates or pads.
    pub fn from_elements_sized<I>(elements: I, range: LogicRange) -> Result<Self>
    where
        I: IntoIterator<Item = Logic>,
    {
        let elements: Vec<Logic> = elements.into_iter().collect();
        if elements.len() != range.len() {
            return Err(QuadsigError::LengthMismatch {
                length: elements.len(),
                range,
            });
        }
        Ok(Self { elements, range })
    }

    /// Parse a symbol string into an explicitly-ranged vector.
    pub fn from_str_sized(symbols: &str, range: LogicRange) -> Result<Self> {
        let elements = symbols
            .chars()
            .map(Logic::try_from)
            .collect::<Result<Vec<Logic>>>()?;
        Self::from_elements_sized(elements, range)
    }

    /// Unsigned integer, minimal width, zero-based descending range.
    ///
    /// `from_uint(0)` is the single-bit vector `"0"`.
    pub fn from_uint(value: u128) -> Self {
        let width = unsigned_width(value);
        Self {
            elements: encode_uint(value, width),
            range: LogicRange::descending(width as i32 - 1, 0),
        }
    }

    /// Unsigned integer rendered into an explicit range.
    ///
    /// Fails when the minimal width exceeds the range length; otherwise
    /// the value is zero-extended to fill the range exactly.
    pub fn from_uint_sized(value: u128, range: LogicRange) -> Result<Self> {
        let width = unsigned_width(value);
        if width > range.len() {
            return Err(QuadsigError::ValueTooWide { width, range });
        }
        Ok(Self {
            elements: encode_uint(value, range.len()),
            range,
        })
    }

    /// Signed integer, minimal two's-complement width, zero-based
    /// descending range. `from_int(-1)` is `"1"`.
    pub fn from_int(value: i128) -> Self {
        let width = signed_width(value);
        Self {
            elements: encode_int(value, width),
            range: LogicRange::descending(width as i32 - 1, 0),
        }
    }

    /// Signed integer rendered into an explicit range, sign-extended for
    /// negative values. Fails when the minimal width exceeds the range.
    pub fn from_int_sized(value: i128, range: LogicRange) -> Result<Self> {
        let width = signed_width(value);
        if width > range.len() {
            return Err(QuadsigError::ValueTooWide { width, range });
        }
        Ok(Self {
            elements: encode_int(value, range.len()),
            range,
        })
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Is the vector empty (null range)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The caller-facing indexing scheme.
    #[inline]
    pub fn range(&self) -> LogicRange {
        self.range
    }

    /// A new vector with mirrored storage and the reversed range.
    ///
    /// `"000ZX1"` over `(5 downto 0)` becomes `"1XZ000"` over `(0 to 5)`.
    /// This is a structural transform, not a view; reversing twice
    /// restores the original.
    pub fn reverse(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.reverse();
        Self {
            elements,
            range: self.range.reverse(),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Element symbols concatenated most-significant-first.
    ///
    /// Independent of range direction: the range labels positions, it
    /// never reorders storage.
    pub fn binstr(&self) -> String {
        self.elements.iter().map(|element| element.symbol()).collect()
    }

    /// True iff every element is binary (0 or 1). Never fails.
    pub fn is_resolvable(&self) -> bool {
        self.elements.iter().all(|element| element.is_binary())
    }

    /// Unsigned integer view, folding bits most-significant-first.
    ///
    /// Fails on any X/Z element, or when the value leaves the 128-bit
    /// domain.
    pub fn to_unsigned(&self) -> Result<u128> {
        let mut value: u128 = 0;
        for element in &self.elements {
            let bit = element.to_bit()?;
            if value >> 127 != 0 {
                return Err(QuadsigError::IntegerOverflow { length: self.len() });
            }
            value = value << 1 | bit as u128;
        }
        Ok(value)
    }

    /// Two's-complement view: [`to_unsigned`](Self::to_unsigned), minus
    /// `1 << len()` when the most significant bit is set.
    pub fn to_signed(&self) -> Result<i128> {
        let value = self.to_unsigned()?;
        if self.elements.first() == Some(&Logic::One) {
            if self.len() > 128 {
                return Err(QuadsigError::IntegerOverflow { length: self.len() });
            }
            // 1 << 128 is congruent to 0 in the 128-bit ring
            let modulus = if self.len() == 128 {
                0
            } else {
                1u128 << self.len()
            };
            Ok(value.wrapping_sub(modulus) as i128)
        } else {
            if value > i128::MAX as u128 {
                return Err(QuadsigError::IntegerOverflow { length: self.len() });
            }
            Ok(value as i128)
        }
    }

    /// Boolean view of the binary string, scanned most-significant-first.
    ///
    /// The first `1` decides the answer; an X/Z element encountered
    /// before any `1` fails. X/Z strictly after the first `1` does not -
    /// the result is already determined.
    pub fn to_bool(&self) -> Result<bool> {
        for element in &self.elements {
            match element {
                Logic::One => return Ok(true),
                Logic::Zero => {}
                _ => return Err(QuadsigError::Unresolvable),
            }
        }
        Ok(false)
    }

    // =========================================================================
    // Indexed access (range coordinates, never storage offsets)
    // =========================================================================

    /// Element at a range position.
    pub fn get(&self, index: i32) -> Result<Logic> {
        let offset = self
            .range
            .offset_of(index)
            .ok_or(QuadsigError::IndexOutOfRange {
                index,
                range: self.range,
            })?;
        Ok(self.elements[offset])
    }

    /// Overwrite the element at a range position.
    pub fn set(&mut self, index: i32, value: impl Into<Logic>) -> Result<()> {
        let offset = self
            .range
            .offset_of(index)
            .ok_or(QuadsigError::IndexOutOfRange {
                index,
                range: self.range,
            })?;
        self.elements[offset] = value.into();
        Ok(())
    }

    fn slice_offsets(&self, left: i32, right: i32) -> Result<(usize, usize)> {
        let out_of_range = || QuadsigError::SliceOutOfRange {
            left,
            right,
            range: self.range,
        };
        let start = self.range.offset_of(left).ok_or_else(out_of_range)?;
        let end = self.range.offset_of(right).ok_or_else(out_of_range)?;
        if start > end {
            return Err(out_of_range());
        }
        Ok((start, end))
    }

    /// Copy of a contiguous sub-range, bounds given in range coordinates
    /// in the range's own declaration order.
    ///
    /// The result carries a range with the requested bounds and the
    /// parent's direction.
    pub fn slice(&self, left: i32, right: i32) -> Result<Self> {
        let (start, end) = self.slice_offsets(left, right)?;
        Ok(Self {
            elements: self.elements[start..=end].to_vec(),
            range: LogicRange::new(left, self.range.direction(), right),
        })
    }

    /// Overwrite a contiguous sub-range. The value count must equal the
    /// slice length exactly.
    pub fn set_slice<I, T>(&mut self, left: i32, right: i32, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<Logic>,
    {
        let (start, end) = self.slice_offsets(left, right)?;
        let values: Vec<Logic> = values.into_iter().map(Into::into).collect();
        let expected = end - start + 1;
        if values.len() != expected {
            return Err(QuadsigError::SliceSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        self.elements[start..=end].copy_from_slice(&values);
        Ok(())
    }

    /// Overwrite a contiguous sub-range from a symbol string, coercing
    /// each character through [`Logic`].
    pub fn set_slice_str(&mut self, left: i32, right: i32, symbols: &str) -> Result<()> {
        let values = symbols
            .chars()
            .map(Logic::try_from)
            .collect::<Result<Vec<Logic>>>()?;
        self.set_slice(left, right, values)
    }

    /// Does any element hold the given state?
    pub fn contains(&self, state: Logic) -> bool {
        self.elements.contains(&state)
    }

    /// Iterate elements most-significant-first.
    pub fn iter(&self) -> impl Iterator<Item = Logic> + '_ {
        self.elements.iter().copied()
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Explicit cross-type equality: integers promote through the
    /// unsigned view, strings re-parse as vectors, vectors compare
    /// symbol-by-symbol. X and Z are never wildcards.
    ///
    /// An unresolvable vector matches no integer, and an unparseable
    /// string matches no vector.
    pub fn matches(&self, other: Operand<'_>) -> bool {
        match other {
            Operand::Integer(value) => *self == value,
            Operand::Text(text) => *self == text,
            Operand::Vector(vector) => self == vector,
        }
    }

    // =========================================================================
    // Bitwise operators
    // =========================================================================

    fn check_same_length(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(QuadsigError::OperandSizeMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        Ok(())
    }

    /// Element-wise four-valued AND. Operands must have equal length;
    /// the result reuses the left operand's range.
    pub fn try_and(&self, other: &Self) -> Result<Self> {
        self.check_same_length(other)?;
        Ok(Self {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a & *b)
                .collect(),
            range: self.range,
        })
    }

    /// Element-wise four-valued OR. Same length and range rules as
    /// [`try_and`](Self::try_and).
    pub fn try_or(&self, other: &Self) -> Result<Self> {
        self.check_same_length(other)?;
        Ok(Self {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a | *b)
                .collect(),
            range: self.range,
        })
    }

    /// Element-wise four-valued XOR. Same length and range rules as
    /// [`try_and`](Self::try_and).
    pub fn try_xor(&self, other: &Self) -> Result<Self> {
        self.check_same_length(other)?;
        Ok(Self {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a ^ *b)
                .collect(),
            range: self.range,
        })
    }

    // =========================================================================
    // Arithmetic operators
    // =========================================================================

    /// Addition over the unsigned views.
    ///
    /// The result is one bit wider than the wider operand (room for the
    /// carry): the wider operand's range grows by one position at its
    /// counting end (descending: `left + 1`; ascending: `right + 1`).
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let wider = if self.len() > other.len() {
            self.range
        } else {
            other.range
        };
        let range = match wider.direction() {
            Direction::Descending => {
                LogicRange::descending(wider.left() + 1, wider.right())
            }
            Direction::Ascending => LogicRange::ascending(wider.left(), wider.right() + 1),
        };
        let value = self
            .to_unsigned()?
            .checked_add(other.to_unsigned()?)
            .ok_or(QuadsigError::ArithmeticOverflow)?;
        Self::from_uint_sized(value, range)
    }

    /// Product of the unsigned views. Plain integer result, never a
    /// vector.
    pub fn mul(&self, other: &Self) -> Result<u128> {
        self.mul_uint(other.to_unsigned()?)
    }

    /// Product of the unsigned view and a plain integer.
    pub fn mul_uint(&self, other: u128) -> Result<u128> {
        self.to_unsigned()?
            .checked_mul(other)
            .ok_or(QuadsigError::ArithmeticOverflow)
    }

    /// Remainder of the unsigned views.
    pub fn rem(&self, other: &Self) -> Result<u128> {
        self.rem_uint(other.to_unsigned()?)
    }

    /// Remainder of the unsigned view by a plain integer.
    pub fn rem_uint(&self, divisor: u128) -> Result<u128> {
        if divisor == 0 {
            return Err(QuadsigError::DivisionByZero);
        }
        Ok(self.to_unsigned()? % divisor)
    }

    /// Floor division of the unsigned views.
    pub fn div_floor(&self, other: &Self) -> Result<u128> {
        self.div_floor_uint(other.to_unsigned()?)
    }

    /// Floor division of the unsigned view by a plain integer.
    pub fn div_floor_uint(&self, divisor: u128) -> Result<u128> {
        if divisor == 0 {
            return Err(QuadsigError::DivisionByZero);
        }
        Ok(self.to_unsigned()? / divisor)
    }

    /// True division of the unsigned views.
    pub fn div(&self, other: &Self) -> Result<f64> {
        self.div_uint(other.to_unsigned()?)
    }

    /// True division of the unsigned view by a plain integer.
    pub fn div_uint(&self, divisor: u128) -> Result<f64> {
        if divisor == 0 {
            return Err(QuadsigError::DivisionByZero);
        }
        Ok(self.to_unsigned()? as f64 / divisor as f64)
    }

    /// Quotient and remainder of the unsigned views.
    pub fn divmod(&self, other: &Self) -> Result<(u128, u128)> {
        self.divmod_uint(other.to_unsigned()?)
    }

    /// Quotient and remainder of the unsigned view by a plain integer.
    pub fn divmod_uint(&self, divisor: u128) -> Result<(u128, u128)> {
        Ok((self.div_floor_uint(divisor)?, self.rem_uint(divisor)?))
    }

    // =========================================================================
    // In-place operators
    //
    // Each recomputes the pure operator, then replaces the receiver's
    // storage. The other operand is never mutated.
    // =========================================================================

    /// `self &= other`.
    pub fn and_assign(&mut self, other: &Self) -> Result<()> {
        let result = self.try_and(other)?;
        self.elements = result.elements;
        Ok(())
    }

    /// `self |= other`.
    pub fn or_assign(&mut self, other: &Self) -> Result<()> {
        let result = self.try_or(other)?;
        self.elements = result.elements;
        Ok(())
    }

    /// `self ^= other`.
    pub fn xor_assign(&mut self, other: &Self) -> Result<()> {
        let result = self.try_xor(other)?;
        self.elements = result.elements;
        Ok(())
    }

    /// `self += other`. Addition grows the vector, so the range is
    /// replaced along with the elements.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        let result = self.try_add(other)?;
        self.elements = result.elements;
        self.range = result.range;
        Ok(())
    }
}

/// Equality between vectors is exact symbol-by-symbol: an X or Z position
/// never equals either of its possible resolved values. Ranges are not
/// compared.
impl PartialEq for LogicVector {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

/// One-directional promotion: the vector's unsigned view against a plain
/// integer. Unresolvable vectors compare unequal to every integer.
impl PartialEq<u128> for LogicVector {
    fn eq(&self, other: &u128) -> bool {
        self.to_unsigned().map_or(false, |value| value == *other)
    }
}

impl PartialEq<LogicVector> for u128 {
    fn eq(&self, other: &LogicVector) -> bool {
        other == self
    }
}

/// One-directional promotion: the vector's two's-complement view against
/// a signed integer. Unresolvable vectors compare unequal to every
/// integer.
impl PartialEq<i128> for LogicVector {
    fn eq(&self, other: &i128) -> bool {
        self.to_signed().map_or(false, |value| value == *other)
    }
}

impl PartialEq<LogicVector> for i128 {
    fn eq(&self, other: &LogicVector) -> bool {
        other == self
    }
}

/// One-directional promotion: re-parse the string as a vector and compare
/// symbol-by-symbol. Unparseable strings compare unequal.
impl PartialEq<&str> for LogicVector {
    fn eq(&self, other: &&str) -> bool {
        LogicVector::from_str(other).map_or(false, |vector| vector.elements == self.elements)
    }
}

impl PartialEq<LogicVector> for &str {
    fn eq(&self, other: &LogicVector) -> bool {
        *other == *self
    }
}

impl FromStr for LogicVector {
    type Err = QuadsigError;

    /// Parse a symbol string, coercing each character through [`Logic`]
    /// and synthesizing a zero-based descending range.
    fn from_str(symbols: &str) -> Result<Self> {
        let elements = symbols
            .chars()
            .map(Logic::try_from)
            .collect::<Result<Vec<Logic>>>()?;
        Ok(Self::from_elements(elements))
    }
}

impl TryFrom<&str> for LogicVector {
    type Error = QuadsigError;

    fn try_from(symbols: &str) -> Result<Self> {
        symbols.parse()
    }
}

impl FromIterator<Logic> for LogicVector {
    fn from_iter<I: IntoIterator<Item = Logic>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

/// Range-coordinate indexing.
///
/// # Panics
/// Panics when `index` lies outside the range; use
/// [`get`](LogicVector::get) for the fallible form.
impl Index<i32> for LogicVector {
    type Output = Logic;

    fn index(&self, index: i32) -> &Logic {
        match self.range.offset_of(index) {
            Some(offset) => &self.elements[offset],
            None => panic!("index {} out of range {}", index, self.range),
        }
    }
}

impl Not for &LogicVector {
    type Output = LogicVector;

    /// Element-wise complement, reusing the receiver's range.
    fn not(self) -> LogicVector {
        LogicVector {
            elements: self.elements.iter().map(|element| !*element).collect(),
            range: self.range,
        }
    }
}

impl Not for LogicVector {
    type Output = LogicVector;

    fn not(self) -> LogicVector {
        !&self
    }
}

impl IntoIterator for LogicVector {
    type Item = Logic;
    type IntoIter = std::vec::IntoIter<Logic>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogicVector {
    type Item = Logic;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Logic>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}

impl fmt::Display for LogicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{}", element.symbol())?;
        }
        Ok(())
    }
}

/// Round-trippable value + range form:
/// `LogicVector("01XZ", LogicRange(3, Descending, 0))`.
impl fmt::Debug for LogicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVector({:?}, {:?})", self.binstr(), self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadsigError;

    fn vector(symbols: &str) -> LogicVector {
        symbols.parse().unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_from_str_synthesizes_descending_range() {
        let v = vector("01XZ");
        assert_eq!(v.len(), 4);
        assert_eq!(v.range(), LogicRange::descending(3, 0));
        assert_eq!(v.binstr(), "01XZ");
    }

    #[test]
    fn test_from_str_propagates_coercion_errors() {
        let err = "01J".parse::<LogicVector>().unwrap_err();
        assert_eq!(err, QuadsigError::InvalidSymbol('J'));
    }

    #[test]
    fn test_filled_is_all_uninitialized() {
        let v = LogicVector::filled(LogicRange::ascending(0, 3));
        assert_eq!(v.len(), 4);
        assert_eq!(v.binstr(), "ZZZZ");
        assert!(!v.is_resolvable());
    }

    #[test]
    fn test_from_uint_minimal_width() {
        assert_eq!(LogicVector::from_uint(0).binstr(), "0");
        assert_eq!(LogicVector::from_uint(1).binstr(), "1");
        let v = LogicVector::from_uint(0xA);
        assert_eq!(v.binstr(), "1010");
        assert_eq!(v.range(), LogicRange::descending(3, 0));
    }

    #[test]
    fn test_from_int_minimal_width() {
        assert_eq!(LogicVector::from_int(0).binstr(), "0");
        assert_eq!(LogicVector::from_int(-1).binstr(), "1");
        assert_eq!(LogicVector::from_int(-4).binstr(), "100");
        assert_eq!(LogicVector::from_int(10).binstr(), "1010");
    }

    #[test]
    fn test_from_int_sized_sign_extends() {
        let v = LogicVector::from_int_sized(-4, LogicRange::ascending(0, 3)).unwrap();
        assert_eq!(v.binstr(), "1100");
        assert_eq!(v.range(), LogicRange::ascending(0, 3));

        let v = LogicVector::from_int_sized(3, LogicRange::descending(5, 0)).unwrap();
        assert_eq!(v.binstr(), "000011");
    }

    #[test]
    fn test_from_uint_sized_rejects_wide_values() {
        let range = LogicRange::descending(2, 0);
        let err = LogicVector::from_uint_sized(10, range).unwrap_err();
        assert_eq!(err, QuadsigError::ValueTooWide { width: 4, range });

        // exact fit is fine
        assert_eq!(
            LogicVector::from_uint_sized(7, range).unwrap().binstr(),
            "111"
        );
    }

    #[test]
    fn test_from_int_sized_rejects_wide_values() {
        let range = LogicRange::descending(2, 0);
        assert!(LogicVector::from_int_sized(-4, range).is_ok()); // needs 3 bits
        assert_eq!(
            LogicVector::from_int_sized(-9, range).unwrap_err(),
            QuadsigError::ValueTooWide { width: 5, range }
        );
    }

    #[test]
    fn test_from_elements_sized_checks_length() {
        let range = LogicRange::descending(3, 0);
        let err =
            LogicVector::from_elements_sized([Logic::One, Logic::Zero], range).unwrap_err();
        assert_eq!(err, QuadsigError::LengthMismatch { length: 2, range });
    }

    #[test]
    fn test_from_iterator() {
        let v: LogicVector = [true, false, true].iter().map(|&b| Logic::from(b)).collect();
        assert_eq!(v.binstr(), "101");
        assert_eq!(v.range(), LogicRange::descending(2, 0));
    }

    // =========================================================================
    // Projections
    // =========================================================================

    #[test]
    fn test_binstr_round_trip() {
        for symbols in ["0", "1", "01XZ", "ZZZZ", "10X1Z0"] {
            assert_eq!(vector(symbols).binstr(), symbols);
        }
    }

    #[test]
    fn test_integer_round_trip_when_resolvable() {
        for value in [0u128, 1, 2, 10, 255, 1 << 40] {
            assert_eq!(LogicVector::from_uint(value).to_unsigned().unwrap(), value);
        }
        for value in [-1i128, -4, -100, 7] {
            assert_eq!(LogicVector::from_int(value).to_signed().unwrap(), value);
        }
    }

    #[test]
    fn test_unsigned_rejects_nonbinary() {
        assert_eq!(
            vector("10X0").to_unsigned().unwrap_err(),
            QuadsigError::Unresolvable
        );
        assert_eq!(
            vector("10Z0").to_unsigned().unwrap_err(),
            QuadsigError::Unresolvable
        );
    }

    #[test]
    fn test_signed_interpretation() {
        assert_eq!(vector("1010").to_signed().unwrap(), -6);
        assert_eq!(vector("0101").to_signed().unwrap(), 5);
        assert_eq!(vector("1").to_signed().unwrap(), -1);
        assert_eq!(vector("0").to_signed().unwrap(), 0);
    }

    #[test]
    fn test_is_resolvable() {
        assert!(vector("1010").is_resolvable());
        assert!(!vector("10X0").is_resolvable());
        assert!(!vector("10Z0").is_resolvable());
    }

    #[test]
    fn test_bool_scan_order() {
        assert!(!vector("0000").to_bool().unwrap());
        assert!(vector("0100").to_bool().unwrap());

        // X/Z before the first 1 poisons the answer
        assert_eq!(vector("00X0").to_bool().unwrap_err(), QuadsigError::Unresolvable);
        assert_eq!(vector("0Z10").to_bool().unwrap_err(), QuadsigError::Unresolvable);

        // X/Z after the first 1 is unreachable: the result is determined
        assert!(vector("01X0").to_bool().unwrap());
        assert!(vector("1ZZZ").to_bool().unwrap());
    }

    // =========================================================================
    // Indexed access
    // =========================================================================

    #[test]
    fn test_get_by_range_position() {
        let v = vector("1010"); // (3 downto 0)
        assert_eq!(v.get(3).unwrap(), Logic::One);
        assert_eq!(v.get(0).unwrap(), Logic::Zero);
        assert_eq!(
            v.get(4).unwrap_err(),
            QuadsigError::IndexOutOfRange {
                index: 4,
                range: LogicRange::descending(3, 0)
            }
        );

        let v = LogicVector::from_str_sized("1010", LogicRange::ascending(1, 4)).unwrap();
        assert_eq!(v.get(1).unwrap(), Logic::One); // MSB sits at the left bound
        assert_eq!(v.get(4).unwrap(), Logic::Zero);
    }

    #[test]
    fn test_index_operator() {
        let v = vector("10");
        assert_eq!(v[1], Logic::One);
        assert_eq!(v[0], Logic::Zero);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics_out_of_range() {
        let v = vector("10");
        let _ = v[2];
    }

    #[test]
    fn test_set_coerces_and_stores() {
        let mut v = vector("1010");
        v.set(3, Logic::HighImpedance).unwrap();
        v.set(0, true).unwrap();
        assert_eq!(v.binstr(), "Z011");
        assert!(v.set(9, false).is_err());
    }

    #[test]
    fn test_slice_carries_sub_range() {
        let v = vector("10X1Z0"); // (5 downto 0)
        let s = v.slice(4, 2).unwrap();
        assert_eq!(s.binstr(), "0X1");
        assert_eq!(s.range(), LogicRange::descending(4, 2));

        let v = LogicVector::from_str_sized("10X1Z0", LogicRange::ascending(0, 5)).unwrap();
        let s = v.slice(1, 3).unwrap();
        assert_eq!(s.binstr(), "0X1");
        assert_eq!(s.range(), LogicRange::ascending(1, 3));
    }

    #[test]
    fn test_slice_bounds_errors() {
        let v = vector("1010"); // (3 downto 0)
        assert!(matches!(
            v.slice(4, 0).unwrap_err(),
            QuadsigError::SliceOutOfRange { .. }
        ));
        // bounds against the range's declaration order
        assert!(matches!(
            v.slice(0, 3).unwrap_err(),
            QuadsigError::SliceOutOfRange { .. }
        ));
    }

    #[test]
    fn test_set_slice() {
        let mut v = vector("1010");
        v.set_slice(2, 1, [Logic::HighImpedance, Logic::Unknown])
            .unwrap();
        assert_eq!(v.binstr(), "1ZX0");

        v.set_slice_str(3, 2, "01").unwrap();
        assert_eq!(v.binstr(), "01X0");
    }

    #[test]
    fn test_set_slice_length_mismatch() {
        let mut v = vector("1010");
        assert_eq!(
            v.set_slice(2, 1, [Logic::One]).unwrap_err(),
            QuadsigError::SliceSizeMismatch {
                expected: 2,
                actual: 1
            }
        );
        // a failed assignment leaves the vector untouched
        assert_eq!(v.binstr(), "1010");
    }

    #[test]
    fn test_contains_and_iteration() {
        let v = vector("10X1Z0");
        assert!(v.contains(Logic::Unknown));
        assert!(!vector("1010").contains(Logic::HighImpedance));

        let elements: Vec<Logic> = v.iter().collect();
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0], Logic::One);
        assert_eq!(elements[2], Logic::Unknown);
    }

    // =========================================================================
    // Reversal
    // =========================================================================

    #[test]
    fn test_reverse_mirrors_storage_and_range() {
        let v = vector("000ZX1");
        let r = v.reverse();
        assert_eq!(r.binstr(), "1XZ000");
        assert_eq!(r.range(), LogicRange::ascending(0, 5));
        assert_eq!(r.len(), v.len());
        assert_ne!(r.range().direction(), v.range().direction());
    }

    #[test]
    fn test_reverse_involution() {
        let v = LogicVector::from_str_sized("10X1Z0", LogicRange::ascending(2, 7)).unwrap();
        let rr = v.reverse().reverse();
        assert_eq!(rr, v);
        assert_eq!(rr.range(), v.range());
    }

    // =========================================================================
    // Equality
    // =========================================================================

    #[test]
    fn test_equality_with_integers() {
        assert!(vector("1010") == 10u128);
        assert!(10u128 == vector("1010"));
        assert!(vector("1010") != 11u128);
        // unresolvable vectors equal no integer
        assert!(vector("10X0") != 10u128);
        assert!(vector("0") == 0u128);
    }

    #[test]
    fn test_equality_with_signed_integers() {
        assert!(vector("1010") == -6i128);
        assert!(-6i128 == vector("1010"));
        assert!(vector("0101") == 5i128);
        // the signed promotion reads two's complement, not unsigned
        assert!(vector("1010") != 10i128);
        // unresolvable vectors equal no integer
        assert!(vector("10X0") != -8i128);
    }

    #[test]
    fn test_equality_with_strings() {
        assert!(vector("10X1Z0") == "10X1Z0");
        // aliases normalize through parsing
        assert!(vector("10X1Z0") == "10x1z0");
        // X/Z are not wildcards
        assert!(vector("10X1Z0") != "1001Z0");
        assert!(vector("10X1Z0") != "1011Z0");
        assert!(vector("10X1Z0") != "10X100");
        assert!(vector("10X1Z0") != "10X110");
        // unparseable strings match nothing
        assert!(vector("1010") != "10j0");
    }

    #[test]
    fn test_equality_between_vectors_ignores_range() {
        let a = vector("1010");
        let b = LogicVector::from_str_sized("1010", LogicRange::ascending(4, 7)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, vector("1011"));
        assert_ne!(vector("10X0"), vector("1000"));
    }

    #[test]
    fn test_matches_tagged_operands() {
        let v = vector("1010");
        assert!(v.matches(Operand::Integer(10)));
        assert!(v.matches(Operand::Text("1010")));
        assert!(v.matches(Operand::Vector(&vector("1010"))));
        assert!(!v.matches(Operand::Integer(9)));
        assert!(!vector("10X0").matches(Operand::Integer(8)));
    }

    // =========================================================================
    // Bitwise operators
    // =========================================================================

    #[test]
    fn test_bitwise_and_or_xor() {
        let a = vector("0011");
        let b = vector("1001");
        assert_eq!(a.try_and(&b).unwrap().binstr(), "0001");
        assert_eq!(a.try_or(&b).unwrap().binstr(), "1011");
        assert_eq!(a.try_xor(&b).unwrap().binstr(), "1010");
    }

    #[test]
    fn test_bitwise_commutes() {
        let a = vector("01XZ");
        let b = vector("1Z0X");
        assert_eq!(a.try_and(&b).unwrap(), b.try_and(&a).unwrap());
        assert_eq!(a.try_or(&b).unwrap(), b.try_or(&a).unwrap());
        assert_eq!(a.try_xor(&b).unwrap(), b.try_xor(&a).unwrap());
    }

    #[test]
    fn test_bitwise_keeps_left_range() {
        let a = LogicVector::from_str_sized("0011", LogicRange::ascending(1, 4)).unwrap();
        let b = vector("1001");
        assert_eq!(a.try_and(&b).unwrap().range(), LogicRange::ascending(1, 4));
    }

    #[test]
    fn test_bitwise_length_mismatch() {
        let err = vector("0011").try_and(&vector("10")).unwrap_err();
        assert_eq!(err, QuadsigError::OperandSizeMismatch { lhs: 4, rhs: 2 });
        assert!(vector("0011").try_or(&vector("10")).is_err());
        assert!(vector("0011").try_xor(&vector("10")).is_err());
    }

    #[test]
    fn test_complement_and_de_morgan() {
        assert_eq!((!vector("01XZ")).binstr(), "10XX");

        // ~(a & b) == ~a | ~b over binary operands
        let a = vector("0110");
        let b = vector("1100");
        let lhs = !a.try_and(&b).unwrap();
        let rhs = (!&a).try_or(&!&b).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_mux_scenario() {
        // "0110" & ~"1110" == "0000"
        let a = vector("0110");
        let p = vector("1110");
        assert_eq!(a.try_and(&!p).unwrap(), vector("0000"));
    }

    // =========================================================================
    // Arithmetic operators
    // =========================================================================

    #[test]
    fn test_addition_value_and_width() {
        let a = vector("1110");
        let b = vector("10");
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.to_unsigned().unwrap(), 16);
        assert_eq!(sum.len(), 5);
        assert_eq!(sum.binstr(), "10000");
    }

    #[test]
    fn test_addition_width_law() {
        for (a, b) in [("1", "1"), ("111", "1"), ("0101", "101010")] {
            let (a, b) = (vector(a), vector(b));
            let expected = a.len().max(b.len()) + 1;
            assert_eq!(a.try_add(&b).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_addition_extends_wider_range() {
        // descending ranges grow at left
        let a = LogicVector::from_str_sized("11100000", LogicRange::descending(8, 1)).unwrap();
        let b = vector("10");
        assert_eq!(
            a.try_add(&b).unwrap().range(),
            LogicRange::descending(9, 1)
        );

        // ascending ranges grow at right
        let a = LogicVector::from_str_sized("1110000", LogicRange::ascending(1, 7)).unwrap();
        assert_eq!(a.try_add(&b).unwrap().range(), LogicRange::ascending(1, 8));
    }

    #[test]
    fn test_addition_rejects_nonbinary() {
        assert_eq!(
            vector("1X").try_add(&vector("10")).unwrap_err(),
            QuadsigError::Unresolvable
        );
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(vector("1110").mul(&vector("10")).unwrap(), 28);
        assert_eq!(vector("1110").mul_uint(3).unwrap(), 42);
    }

    #[test]
    fn test_division_family() {
        let a = vector("1110");
        let b = vector("10");
        assert_eq!(a.div_floor(&b).unwrap(), 7);
        assert_eq!(a.div_floor_uint(2).unwrap(), 7);
        assert_eq!(a.rem(&b).unwrap(), 0);
        assert_eq!(vector("0001").rem_uint(2).unwrap(), 1);
        assert_eq!(a.div(&b).unwrap(), 7.0);
        assert_eq!(vector("1011").divmod(&b).unwrap(), (5, 1));
        assert_eq!(vector("1011").divmod_uint(2).unwrap(), (5, 1));
    }

    #[test]
    fn test_division_by_zero() {
        let a = vector("1110");
        assert_eq!(a.rem_uint(0).unwrap_err(), QuadsigError::DivisionByZero);
        assert_eq!(
            a.div_floor(&vector("00")).unwrap_err(),
            QuadsigError::DivisionByZero
        );
        assert_eq!(a.div_uint(0).unwrap_err(), QuadsigError::DivisionByZero);
    }

    // =========================================================================
    // In-place operators
    // =========================================================================

    #[test]
    fn test_in_place_bitwise() {
        let b = vector("1001");

        let mut a = vector("0011");
        a.and_assign(&b).unwrap();
        assert_eq!(a.binstr(), "0001");

        let mut a = vector("0011");
        a.or_assign(&b).unwrap();
        assert_eq!(a.binstr(), "1011");

        let mut a = vector("0011");
        a.xor_assign(&b).unwrap();
        assert_eq!(a.binstr(), "1010");

        // the other operand is never mutated
        assert_eq!(b.binstr(), "1001");
    }

    #[test]
    fn test_in_place_add_replaces_range() {
        let mut a = vector("0011");
        let b = vector("01");
        a.add_assign(&b).unwrap();
        assert_eq!(a.to_unsigned().unwrap(), 4);
        assert_eq!(a.len(), 5);
        assert_eq!(a.range(), LogicRange::descending(4, 0));
        assert_eq!(b.binstr(), "01");
    }

    #[test]
    fn test_in_place_failure_leaves_receiver_unchanged() {
        let mut a = vector("0011");
        assert!(a.and_assign(&vector("10")).is_err());
        assert_eq!(a.binstr(), "0011");
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_checks_length_invariant() {
        // two elements under a four-position range must be rejected, not
        // admitted as a vector that later indexes out of bounds
        let mismatched = r#"{"elements":["One","Zero"],"range":{"left":3,"right":0,"direction":"Descending"}}"#;
        let err = serde_json::from_str::<LogicVector>(mismatched).unwrap_err();
        assert!(err.to_string().contains("will not fit"));

        let matched = r#"{"elements":["One","Zero"],"range":{"left":1,"right":0,"direction":"Descending"}}"#;
        let v: LogicVector = serde_json::from_str(matched).unwrap();
        assert_eq!(v.binstr(), "10");
        assert_eq!(v.get(0).unwrap(), Logic::Zero);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization_round_trip() {
        let v = LogicVector::from_str_sized("10X1Z0", LogicRange::ascending(2, 7)).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: LogicVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.range(), v.range());
    }

    #[test]
    fn test_display_is_binstr() {
        assert_eq!(vector("10X1Z0").to_string(), "10X1Z0");
    }

    #[test]
    fn test_debug_is_round_trippable_form() {
        assert_eq!(
            format!("{:?}", vector("01XZ")),
            "LogicVector(\"01XZ\", LogicRange(3, Descending, 0))"
        );
    }
}
