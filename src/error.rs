//! Error types for quadsig

use thiserror::Error;

use crate::range::LogicRange;

/// Quadsig error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuadsigError {
    /// A character that names no logic state
    #[error("invalid logic symbol {0:?}")]
    InvalidSymbol(char),

    /// An integer bit value other than 0 or 1
    #[error("invalid logic bit {0}, expected 0 or 1")]
    InvalidBit(u8),

    /// Integer value too wide for an explicitly supplied range
    #[error("value requiring {width} bits will not fit in {range}")]
    ValueTooWide { width: usize, range: LogicRange },

    /// Element sequence length disagrees with an explicitly supplied range
    #[error("value of length {length} will not fit in {range}")]
    LengthMismatch { length: usize, range: LogicRange },

    /// Index outside the vector's range
    #[error("index {index} out of range {range}")]
    IndexOutOfRange { index: i32, range: LogicRange },

    /// Slice bounds outside the vector's range, or in the wrong order
    #[error("slice [{left}:{right}] out of range {range}")]
    SliceOutOfRange {
        left: i32,
        right: i32,
        range: LogicRange,
    },

    /// Slice assignment with the wrong number of elements
    #[error("cannot assign {actual} elements to a slice of length {expected}")]
    SliceSizeMismatch { expected: usize, actual: usize },

    /// Binary operator applied to vectors of differing lengths
    #[error("cannot combine vectors of length {lhs} and {rhs}")]
    OperandSizeMismatch { lhs: usize, rhs: usize },

    /// Integer or boolean view of a vector holding X or Z bits
    #[error("vector contains unknown (X) or uninitialized (Z) bits")]
    Unresolvable,

    /// Integer view wider than the 128-bit arithmetic domain
    #[error("value of vector of length {length} exceeds the 128-bit integer view")]
    IntegerOverflow { length: usize },

    /// Arithmetic whose result leaves the 128-bit integer domain
    #[error("arithmetic result exceeds the 128-bit integer domain")]
    ArithmeticOverflow,

    /// Arithmetic with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, QuadsigError>;
