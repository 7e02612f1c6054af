//! # Quadsig - Four-Valued Logic Vectors
//!
//! Value types for modeling digital-hardware signals in test and
//! verification code: a four-state logic bit and a fixed-size,
//! arbitrarily-indexed vector of them.
//!
//! ## Core Components
//!
//! - **Logic**: one bit with exactly four states - `0`, `1`, unknown
//!   (`X`), uninitialized/high-impedance (`Z`)
//! - **LogicRange**: arbitrary-bound, direction-tagged indexing
//!   (`7 downto 0`, `1 to 8`, ...) decoupled from storage order
//! - **LogicVector**: the vector itself, with exact bidirectional
//!   string/integer conversions and four-valued operators
//!
//! ## Design Principles
//!
//! - **One canonical representation**: every construction path
//!   normalizes eagerly into an element sequence; projections are
//!   computed, never cached
//! - **Loss-aware conversions**: integer views fail loudly on X/Z bits
//!   instead of guessing; construction never silently truncates or pads
//! - **Pure values**: operators return new vectors; in-place forms
//!   mutate only the receiver
//!
//! ## Example
//!
//! ```
//! use quadsig::{LogicRange, LogicVector};
//!
//! let bus: LogicVector = "1110".parse().unwrap();
//! assert_eq!(bus.to_unsigned().unwrap(), 14);
//!
//! // widths grow to hold the carry
//! let sum = bus.try_add(&"10".parse().unwrap()).unwrap();
//! assert_eq!(sum.binstr(), "10000");
//! assert_eq!(sum.range(), LogicRange::descending(4, 0));
//!
//! // non-binary bits survive every transform, but block integer reads
//! let word = LogicVector::filled(LogicRange::descending(3, 0));
//! assert_eq!(word.binstr(), "ZZZZ");
//! assert!(word.to_unsigned().is_err());
//! ```

// Logic - the four-valued element
mod logic;
pub use logic::Logic;

// LogicRange - caller-facing indexing scheme
mod range;
pub use range::{Direction, LogicRange, Positions};

// LogicVector - the vector and its operators
mod vector;
pub use vector::{LogicVector, Operand};

// Error types
mod error;
pub use error::{QuadsigError, Result};
