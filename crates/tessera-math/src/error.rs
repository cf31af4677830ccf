// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Recoverable errors at the edges of the crate.
//!
//! Algebra itself never returns errors (see [`crate::contract`]); only
//! boundary operations do: building trig tables and loading values from
//! caller-provided slices of unknown length.

use thiserror::Error;

/// Errors raised by table setup and slice interchange.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Trig tables need at least one sample per period.
    #[error("invalid trig table size {0}: must be at least 1")]
    InvalidTableSize(usize),
    /// A flat float slice did not hold exactly the expected number of values.
    #[error("slice length mismatch: expected {expected} floats, got {actual}")]
    SliceLength {
        /// Number of floats the target type needs.
        expected: usize,
        /// Number of floats supplied.
        actual: usize,
    },
}
