//! Disassembler for LS-8 programs.
//!
//! Converts program bytes back to readable assembly.

use crate::cpu::decode::{Instruction, Opcode};

/// Disassemble a single instruction to text.
pub fn disassemble_instruction(instr: &Instruction) -> String {
    let mnemonic = instr.opcode.mnemonic();
    match instr.opcode {
        // LDI's second operand is an immediate, not a register
        Opcode::Ldi => format!("{} R{},{}", mnemonic, instr.operand_a, instr.operand_b),
        _ => match instr.opcode.operand_count() {
            0 => mnemonic.to_string(),
            1 => format!("{} R{}", mnemonic, instr.operand_a),
            _ => format!("{} R{},R{}", mnemonic, instr.operand_a, instr.operand_b),
        },
    }
}

/// Disassemble a byte sequence, starting at address 0.
///
/// Bytes that do not decode as opcodes are rendered as `DB` lines, so data
/// regions survive a round trip through the disassembler.
pub fn disassemble(bytes: &[u8]) -> String {
    let mut output = String::new();
    output.push_str("# LS-8 disassembly\n\n");

    let mut addr = 0;
    while addr < bytes.len() {
        match Opcode::from_u8(bytes[addr]) {
            Ok(opcode) => {
                let count = opcode.operand_count() as usize;
                let instr = Instruction {
                    opcode,
                    operand_a: bytes.get(addr + 1).copied().unwrap_or(0),
                    operand_b: bytes.get(addr + 2).copied().unwrap_or(0),
                };
                output.push_str(&format!(
                    "{:03}: {}\n",
                    addr,
                    disassemble_instruction(&instr)
                ));
                addr += 1 + count;
            }
            Err(_) => {
                output.push_str(&format!("{:03}: DB {:#010b}\n", addr, bytes[addr]));
                addr += 1;
            }
        }
    }

    output
}
