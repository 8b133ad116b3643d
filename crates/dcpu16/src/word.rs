//! Word sanitization: every write into RAM or a register is reduced modulo
//! `2^width` before it is stored. Opcode handlers compute in wider integers
//! (at least `width + 1` bits for ADD, `2 * width` for MUL/SHL) and only
//! truncate at the final sanitizing write.

/// Default DCPU-16 word width in bits.
pub const DEFAULT_WIDTH: u32 = 16;

/// Reduce `value` modulo `2^width`, matching the source's Python `%`
/// semantics for non-negative input (callers never pass negative values —
/// the public API is `u64`-typed, see `DESIGN.md` OQ-2).
#[must_use]
pub const fn sanitize(value: u64, width: u32) -> u64 {
    if width >= 64 {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}

/// `2^width`, used as the overflow threshold for ADD and the dividend shift
/// for DIV/MOD.
#[must_use]
pub const fn modulus(width: u32) -> u64 {
    if width >= 64 { u64::MAX } else { 1u64 << width }
}
