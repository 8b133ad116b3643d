//! Conditional-skip procedure (§4.7).
//!
//! When IFE/IFN/IFG/IFB fails, the entire next instruction — its opcode
//! word plus any inline words its operands would have consumed — is
//! skipped without applying any of its side effects. Only the raw words are
//! fetched (to advance PC past them); their operand codes are decoded just
//! far enough to know whether an inline word follows.

use crate::cpu::Cpu;
use crate::cpu::operand::consumes_extra_word;
use crate::cpu::decompile_word;
use crate::error::DcpuError;

/// Skip the next instruction. Adds a flat +1 cycle regardless of how many
/// inline words the skipped instruction's operands consumed.
pub(crate) fn perform(cpu: &mut Cpu) -> Result<(), DcpuError> {
    let word = cpu.next_word()?;
    let (b, a, _o) = decompile_word(word as u16);
    for code in [a, b] {
        if consumes_extra_word(code) {
            cpu.next_word()?;
        }
    }
    cpu.add_cycles(1);
    Ok(())
}
