//! Operand code resolution (§4.4).
//!
//! Resolving an operand code reads its value and freezes its write target
//! (if any) in the same step, before any later operand is resolved — see
//! the ordering note in §4.4 and the modeling note in §9. Side effects (PC
//! advance from consuming an inline word, SP change for POP/PEEK/PUSH)
//! happen exactly once, during this resolution, regardless of whether the
//! caller later reads or writes through the returned target.

use crate::cpu::Cpu;
use crate::error::{DcpuError, DecodeError};
use crate::registers::RegisterName;
use crate::word::sanitize;

/// Where a resolved operand's value would be written, if written at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Write to a named register.
    Register(RegisterName),
    /// Write to a RAM address, captured at resolution time.
    Ram(usize),
    /// Literal and `0x1F` (NW) operands discard writes silently.
    Discard,
}

/// True for operand codes that consume one inline word during resolution
/// (§4.4's "consumes extra word" column): `0x10..=0x17`, `0x1E`, `0x1F`.
#[must_use]
pub fn consumes_extra_word(code: u16) -> bool {
    (0x10..=0x17).contains(&code) || code == 0x1E || code == 0x1F
}

/// Resolve an operand code to its current value and write target, applying
/// any side effects (PC/SP mutation, inline-word fetch, the +1 cycle
/// surcharge for NW-consuming forms) along the way.
///
/// # Errors
/// Returns [`DecodeError::InvalidOperandCode`] if `code` is outside
/// `0x00..=0x3F`, or a RAM [`DcpuError::RangeError`] if a resolved address
/// falls outside the RAM's bounds.
pub(crate) fn resolve(cpu: &mut Cpu, code: u16) -> Result<(u64, Target), DcpuError> {
    match code {
        0x00..=0x07 => {
            let name = RegisterName::from_gp_index(code as u8).expect("0x00..=0x07 is a gp index");
            Ok((cpu.regs().get(name), Target::Register(name)))
        }
        0x08..=0x0F => {
            let addr = cpu.regs().get_gp((code - 0x08) as u8) as usize;
            let value = cpu.ram().get(addr)?;
            Ok((value, Target::Ram(addr)))
        }
        0x10..=0x17 => {
            let reg = cpu.regs().get_gp((code - 0x10) as u8);
            let nw = cpu.next_word()?;
            cpu.add_cycles(1);
            let width = cpu.regs().width();
            let addr = sanitize(nw + reg, width) as usize;
            let value = cpu.ram().get(addr)?;
            Ok((value, Target::Ram(addr)))
        }
        0x18 => {
            // POP: read RAM[SP], then SP += 1.
            let addr = cpu.regs().get(RegisterName::Sp) as usize;
            let value = cpu.ram().get(addr)?;
            let sp = cpu.regs().get(RegisterName::Sp);
            cpu.regs_mut().set(RegisterName::Sp, sp.wrapping_add(1));
            Ok((value, Target::Ram(addr)))
        }
        0x19 => {
            // PEEK: read RAM[SP], no SP change.
            let addr = cpu.regs().get(RegisterName::Sp) as usize;
            let value = cpu.ram().get(addr)?;
            Ok((value, Target::Ram(addr)))
        }
        0x1A => {
            // PUSH: SP -= 1, then read/write RAM[SP].
            let sp = cpu.regs().get(RegisterName::Sp);
            cpu.regs_mut().set(RegisterName::Sp, sp.wrapping_sub(1));
            let addr = cpu.regs().get(RegisterName::Sp) as usize;
            let value = cpu.ram().get(addr)?;
            Ok((value, Target::Ram(addr)))
        }
        0x1B => Ok((cpu.regs().get(RegisterName::Sp), Target::Register(RegisterName::Sp))),
        0x1C => Ok((cpu.regs().get(RegisterName::Pc), Target::Register(RegisterName::Pc))),
        0x1D => Ok((cpu.regs().get(RegisterName::O), Target::Register(RegisterName::O))),
        0x1E => {
            let nw = cpu.next_word()?;
            cpu.add_cycles(1);
            let addr = nw as usize;
            let value = cpu.ram().get(addr)?;
            Ok((value, Target::Ram(addr)))
        }
        0x1F => {
            let nw = cpu.next_word()?;
            cpu.add_cycles(1);
            Ok((nw, Target::Discard))
        }
        0x20..=0x3F => Ok((u64::from(code - 0x20), Target::Discard)),
        other => Err(DecodeError::InvalidOperandCode(other).into()),
    }
}
