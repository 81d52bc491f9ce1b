//! Opcode definitions and instruction decoding for the LS-8.
//!
//! An LS-8 opcode byte describes its own shape:
//! - bits 7-6: number of operand bytes that follow (0, 1, or 2)
//! - bit 5: set for instructions handled by the ALU
//! - bit 4: set for instructions that may write the PC
//! - bits 3-0: instruction identifier

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The closed LS-8 opcode set.
///
/// Discriminants are the machine encodings, so `opcode as u8` recovers the
/// instruction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0b0000_0000,
    Hlt = 0b0000_0001,
    Ret = 0b0001_0001,
    Iret = 0b0001_0011,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Pra = 0b0100_1000,
    Call = 0b0101_0000,
    Int = 0b0101_0010,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    Jgt = 0b0101_0111,
    Jlt = 0b0101_1000,
    Jle = 0b0101_1001,
    Jge = 0b0101_1010,
    Inc = 0b0110_0101,
    Dec = 0b0110_0110,
    Not = 0b0110_1001,
    Ldi = 0b1000_0010,
    Ld = 0b1000_0011,
    St = 0b1000_0100,
    Add = 0b1010_0000,
    Sub = 0b1010_0001,
    Mul = 0b1010_0010,
    Div = 0b1010_0011,
    Mod = 0b1010_0100,
    Cmp = 0b1010_0111,
    And = 0b1010_1000,
    Or = 0b1010_1010,
    Xor = 0b1010_1011,
    Shl = 0b1010_1100,
    Shr = 0b1010_1101,
}

/// Every opcode, in encoding order. Used by the assembler and disassembler.
pub const ALL_OPCODES: [Opcode; 34] = [
    Opcode::Nop,
    Opcode::Hlt,
    Opcode::Ret,
    Opcode::Iret,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Prn,
    Opcode::Pra,
    Opcode::Call,
    Opcode::Int,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
    Opcode::Jgt,
    Opcode::Jlt,
    Opcode::Jle,
    Opcode::Jge,
    Opcode::Inc,
    Opcode::Dec,
    Opcode::Not,
    Opcode::Ldi,
    Opcode::Ld,
    Opcode::St,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Cmp,
    Opcode::And,
    Opcode::Or,
    Opcode::Xor,
    Opcode::Shl,
    Opcode::Shr,
];

impl Opcode {
    /// Decode an instruction byte.
    pub fn from_u8(byte: u8) -> Result<Self, DecodeError> {
        let opcode = match byte {
            0b0000_0000 => Opcode::Nop,
            0b0000_0001 => Opcode::Hlt,
            0b0001_0001 => Opcode::Ret,
            0b0001_0011 => Opcode::Iret,
            0b0100_0101 => Opcode::Push,
            0b0100_0110 => Opcode::Pop,
            0b0100_0111 => Opcode::Prn,
            0b0100_1000 => Opcode::Pra,
            0b0101_0000 => Opcode::Call,
            0b0101_0010 => Opcode::Int,
            0b0101_0100 => Opcode::Jmp,
            0b0101_0101 => Opcode::Jeq,
            0b0101_0110 => Opcode::Jne,
            0b0101_0111 => Opcode::Jgt,
            0b0101_1000 => Opcode::Jlt,
            0b0101_1001 => Opcode::Jle,
            0b0101_1010 => Opcode::Jge,
            0b0110_0101 => Opcode::Inc,
            0b0110_0110 => Opcode::Dec,
            0b0110_1001 => Opcode::Not,
            0b1000_0010 => Opcode::Ldi,
            0b1000_0011 => Opcode::Ld,
            0b1000_0100 => Opcode::St,
            0b1010_0000 => Opcode::Add,
            0b1010_0001 => Opcode::Sub,
            0b1010_0010 => Opcode::Mul,
            0b1010_0011 => Opcode::Div,
            0b1010_0100 => Opcode::Mod,
            0b1010_0111 => Opcode::Cmp,
            0b1010_1000 => Opcode::And,
            0b1010_1010 => Opcode::Or,
            0b1010_1011 => Opcode::Xor,
            0b1010_1100 => Opcode::Shl,
            0b1010_1101 => Opcode::Shr,
            _ => return Err(DecodeError::UndefinedOpcode(byte)),
        };
        Ok(opcode)
    }

    /// Number of operand bytes following the opcode (0-2), from the top
    /// two bits of the encoding.
    #[inline]
    pub fn operand_count(self) -> u8 {
        (self as u8) >> 6
    }

    /// True for instructions the ALU executes.
    #[inline]
    pub fn is_alu(self) -> bool {
        (self as u8) & 0b0010_0000 != 0
    }

    /// True for instructions that set the PC themselves and are therefore
    /// excluded from the automatic post-instruction advance.
    ///
    /// INT carries the "may set PC" encoding bit but only writes the
    /// interrupt status register, so it advances normally.
    pub fn sets_pc(self) -> bool {
        matches!(
            self,
            Opcode::Call
                | Opcode::Ret
                | Opcode::Iret
                | Opcode::Jmp
                | Opcode::Jeq
                | Opcode::Jne
                | Opcode::Jgt
                | Opcode::Jge
                | Opcode::Jlt
                | Opcode::Jle
        )
    }

    /// Assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Iret => "IRET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Pra => "PRA",
            Opcode::Call => "CALL",
            Opcode::Int => "INT",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jlt => "JLT",
            Opcode::Jle => "JLE",
            Opcode::Jge => "JGE",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Not => "NOT",
            Opcode::Ldi => "LDI",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
        }
    }

    /// Look up an opcode by its mnemonic (case-insensitive).
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        ALL_OPCODES.into_iter().find(|op| op.mnemonic() == upper)
    }
}

/// A decoded instruction: one opcode plus both potential operand bytes.
///
/// Both operand slots are always populated by the fetch stage; the opcode's
/// arity decides which slots a handler actually reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand_a: u8,
    pub operand_b: u8,
}

impl Instruction {
    /// Encode back to machine bytes (opcode plus its meaningful operands).
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = vec![self.opcode as u8];
        if self.opcode.operand_count() >= 1 {
            bytes.push(self.operand_a);
        }
        if self.opcode.operand_count() >= 2 {
            bytes.push(self.operand_b);
        }
        bytes
    }
}

/// Errors that can occur during instruction decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The fetched byte is not an LS-8 opcode.
    #[error("undefined opcode: {0:#010b}")]
    UndefinedOpcode(u8),
}
