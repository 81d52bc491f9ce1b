//! LS-8 arithmetic/logic unit.
//!
//! Pure byte semantics over two register operands. Every result is masked
//! to 8 bits (native `u8` wrapping arithmetic); CMP is the only operation
//! that writes the flags register.

use super::decode::Opcode;
use super::execute::CpuError;
use super::registers::Registers;

/// The operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    Cmp,
}

impl AluOp {
    /// Map an ALU-class opcode to its operation.
    ///
    /// Returns `None` for opcodes the ALU does not implement.
    pub fn from_opcode(opcode: Opcode) -> Option<Self> {
        match opcode {
            Opcode::Add => Some(AluOp::Add),
            Opcode::Sub => Some(AluOp::Sub),
            Opcode::Mul => Some(AluOp::Mul),
            Opcode::Div => Some(AluOp::Div),
            Opcode::Mod => Some(AluOp::Mod),
            Opcode::Inc => Some(AluOp::Inc),
            Opcode::Dec => Some(AluOp::Dec),
            Opcode::And => Some(AluOp::And),
            Opcode::Or => Some(AluOp::Or),
            Opcode::Xor => Some(AluOp::Xor),
            Opcode::Not => Some(AluOp::Not),
            Opcode::Shl => Some(AluOp::Shl),
            Opcode::Shr => Some(AluOp::Shr),
            Opcode::Cmp => Some(AluOp::Cmp),
            _ => None,
        }
    }
}

/// Apply an ALU operation to the register file.
///
/// `reg_a` is the destination register index, `reg_b` the source. Unary
/// operations (INC/DEC/NOT) never touch `reg_b`, so a stale operand byte
/// there cannot fault.
pub fn apply(op: AluOp, reg_a: u8, reg_b: u8, regs: &mut Registers) -> Result<(), CpuError> {
    let dest = regs.get(reg_a)?;

    match op {
        AluOp::Add => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest.wrapping_add(src))?;
        }
        AluOp::Sub => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest.wrapping_sub(src))?;
        }
        AluOp::Mul => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest.wrapping_mul(src))?;
        }
        AluOp::Div => {
            let src = regs.get(reg_b)?;
            if src == 0 {
                return Err(CpuError::DivisionByZero);
            }
            regs.set(reg_a, dest / src)?;
        }
        AluOp::Mod => {
            let src = regs.get(reg_b)?;
            if src == 0 {
                return Err(CpuError::DivisionByZero);
            }
            regs.set(reg_a, dest % src)?;
        }
        AluOp::Inc => {
            regs.set(reg_a, dest.wrapping_add(1))?;
        }
        AluOp::Dec => {
            regs.set(reg_a, dest.wrapping_sub(1))?;
        }
        AluOp::And => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest & src)?;
        }
        AluOp::Or => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest | src)?;
        }
        AluOp::Xor => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest ^ src)?;
        }
        AluOp::Not => {
            regs.set(reg_a, !dest)?;
        }
        AluOp::Shl => {
            let src = regs.get(reg_b)?;
            // Shifting out the whole byte leaves zero
            regs.set(reg_a, dest.checked_shl(src as u32).unwrap_or(0))?;
        }
        AluOp::Shr => {
            let src = regs.get(reg_b)?;
            regs.set(reg_a, dest.checked_shr(src as u32).unwrap_or(0))?;
        }
        AluOp::Cmp => {
            let src = regs.get(reg_b)?;
            regs.fl.set_compare(dest, src);
        }
    }

    Ok(())
}
