//! Basic (§4.5) and non-basic (§4.6) opcode dispatch.
//!
//! A match over the opcode field gives the compiler exhaustiveness checking
//! over the 15 defined basic opcodes (§9) rather than a dispatch table.

use crate::cpu::Cpu;
use crate::cpu::operand::{self, Target};
use crate::error::{DcpuError, DecodeError};
use crate::registers::RegisterName;
use crate::word::modulus;

/// Execute a basic instruction (`o` in `1..=0xF`) given the already-resolved
/// A value/target and B value.
pub(crate) fn execute_basic(
    cpu: &mut Cpu,
    o: u16,
    a_value: u64,
    a_target: Target,
    b_value: u64,
) -> Result<(), DcpuError> {
    let width = cpu.regs().width();
    let modulus = modulus(width);

    match o {
        0x1 => {
            // SET
            cpu.add_cycles(1);
            cpu.write_target(a_target, b_value)?;
        }
        0x2 => {
            // ADD
            cpu.add_cycles(2);
            let sum = a_value + b_value;
            cpu.write_target(a_target, sum)?;
            cpu.regs_mut()
                .set(RegisterName::O, u64::from(sum >= modulus));
        }
        0x3 => {
            // SUB
            cpu.add_cycles(2);
            let diff = i128::from(a_value) - i128::from(b_value);
            cpu.write_target(a_target, diff as i64 as u64)?;
            cpu.regs_mut()
                .set(RegisterName::O, if diff < 0 { modulus - 1 } else { 0 });
        }
        0x4 => {
            // MUL
            cpu.add_cycles(2);
            let product = u128::from(a_value) * u128::from(b_value);
            cpu.write_target(a_target, product as u64)?;
            let overflow = (product >> width) % u128::from(modulus);
            cpu.regs_mut().set(RegisterName::O, overflow as u64);
        }
        0x5 => {
            // DIV
            cpu.add_cycles(3);
            if b_value == 0 {
                cpu.write_target(a_target, 0)?;
                // O is left unchanged — see the DIV ambiguity note (§9).
            } else {
                cpu.write_target(a_target, a_value / b_value)?;
                let wide = u128::from(a_value) << width;
                let overflow = (wide / u128::from(b_value)) % u128::from(modulus);
                cpu.regs_mut().set(RegisterName::O, overflow as u64);
            }
        }
        0x6 => {
            // MOD
            cpu.add_cycles(3);
            if b_value == 0 {
                cpu.write_target(a_target, 0)?;
            } else {
                cpu.write_target(a_target, a_value % b_value)?;
            }
        }
        0x7 => {
            // SHL
            cpu.add_cycles(2);
            let wide = shl_u128(u128::from(a_value), b_value);
            cpu.write_target(a_target, wide as u64)?;
            let overflow = (wide >> width) % u128::from(modulus);
            cpu.regs_mut().set(RegisterName::O, overflow as u64);
        }
        0x8 => {
            // SHR
            cpu.add_cycles(2);
            cpu.write_target(a_target, shr_u64(a_value, b_value))?;
            let wide = u128::from(a_value) << width;
            let overflow = shr_u128(wide, b_value) % u128::from(modulus);
            cpu.regs_mut().set(RegisterName::O, overflow as u64);
        }
        0x9 => {
            // AND
            cpu.add_cycles(1);
            cpu.write_target(a_target, a_value & b_value)?;
        }
        0xA => {
            // BOR
            cpu.add_cycles(1);
            cpu.write_target(a_target, a_value | b_value)?;
        }
        0xB => {
            // XOR
            cpu.add_cycles(1);
            cpu.write_target(a_target, a_value ^ b_value)?;
        }
        0xC => execute_if(cpu, a_value == b_value)?,
        0xD => execute_if(cpu, a_value != b_value)?,
        0xE => execute_if(cpu, a_value > b_value)?,
        0xF => execute_if(cpu, (a_value & b_value) != 0)?,
        _ => unreachable!("o is a 4-bit field restricted to 1..=0xF here"),
    }
    Ok(())
}

/// Shared base cost plus conditional skip for IFE/IFN/IFG/IFB (§4.5, §4.7).
fn execute_if(cpu: &mut Cpu, condition_holds: bool) -> Result<(), DcpuError> {
    cpu.add_cycles(2);
    if !condition_holds {
        cpu.perform_skip()?;
    }
    Ok(())
}

/// Execute the one defined non-basic instruction, JSR (§4.6). `operand_code`
/// is the original word's `b` field, resolved as JSR's sole operand.
pub(crate) fn execute_non_basic(
    cpu: &mut Cpu,
    non_basic_opcode: u16,
    operand_code: u16,
) -> Result<(), DcpuError> {
    match non_basic_opcode {
        0x01 => {
            // JSR: push PC (post operand-resolution), PC <- operand value.
            let (target_pc, _target) = operand::resolve(cpu, operand_code)?;
            let pc = cpu.regs().get(RegisterName::Pc);
            let sp = cpu.regs().get(RegisterName::Sp).wrapping_sub(1);
            cpu.regs_mut().set(RegisterName::Sp, sp);
            let sp = cpu.regs().get(RegisterName::Sp) as usize;
            cpu.ram_mut().set(sp, pc)?;
            cpu.regs_mut().set(RegisterName::Pc, target_pc);
            cpu.add_cycles(2);
            Ok(())
        }
        other => Err(DecodeError::UnknownNonBasicOpcode(other).into()),
    }
}

/// `value << shift`, widened to `u128`; clamps to 0 instead of panicking for
/// shift amounts at or beyond the type's bit width.
fn shl_u128(value: u128, shift: u64) -> u128 {
    if shift >= 128 { 0 } else { value << shift }
}

/// `value >> shift` over `u128`; clamps to 0 for out-of-range shifts.
fn shr_u128(value: u128, shift: u64) -> u128 {
    if shift >= 128 { 0 } else { value >> shift }
}

/// `value >> shift` over `u64`; clamps to 0 for out-of-range shifts.
fn shr_u64(value: u64, shift: u64) -> u64 {
    if shift >= 64 { 0 } else { value >> shift }
}
