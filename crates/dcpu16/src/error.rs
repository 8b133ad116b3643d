//! Error types surfaced by the RAM, register bank, and CPU.
//!
//! Hand-rolled, no `thiserror` — mirrors `format-adf::AdfError` in this
//! workspace: a plain enum with manual `Display`/`Error` impls.

use std::fmt;

/// Errors produced while decoding an instruction word or operand code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Opcode field was 0 (non-basic) but the `a` field held an unrecognized
    /// non-basic opcode.
    UnknownNonBasicOpcode(u16),
    /// An operand code fell outside `0x00..=0x3F`.
    InvalidOperandCode(u16),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNonBasicOpcode(code) => {
                write!(f, "unknown non-basic opcode {code:#06x}")
            }
            Self::InvalidOperandCode(code) => {
                write!(f, "invalid operand code {code:#06x}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can surface from the RAM, register bank, or CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DcpuError {
    /// A write target expected an integer value and did not receive one.
    ///
    /// Unreachable through this crate's own `u64`-typed public API; kept as
    /// a documented extension point (see `DESIGN.md` OQ-1).
    TypeError,
    /// A RAM index fell outside `[0, size)`.
    RangeError {
        /// The offending index.
        index: usize,
        /// The size of the RAM the index was checked against.
        size: usize,
    },
    /// A register was accessed by an unrecognized name.
    KeyError {
        /// The unrecognized name.
        name: String,
    },
    /// An instruction word or operand code could not be decoded.
    Decode(DecodeError),
}

impl fmt::Display for DcpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError => write!(f, "value is not an integer"),
            Self::RangeError { index, size } => {
                write!(f, "RAM index {index} out of range (size {size})")
            }
            Self::KeyError { name } => write!(f, "unknown register {name:?}"),
            Self::Decode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DcpuError {}

impl From<DecodeError> for DcpuError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}
