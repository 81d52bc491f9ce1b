//! LS-8 CPU registers.
//!
//! The LS-8 has 8 general-purpose byte registers plus a program counter and
//! a flags register:
//! - R0-R4: general purpose
//! - R5: IM (interrupt mask, by convention)
//! - R6: IS (interrupt status, by convention)
//! - R7: SP (stack pointer, initialized to 0xF0)

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index of the interrupt mask (by convention).
pub const IM: u8 = 5;

/// Register index of the interrupt status (by convention).
pub const IS: u8 = 6;

/// Register index of the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer value; the stack grows downward from here.
pub const SP_INIT: u8 = 0xF0;

/// The FL flags register, bit pattern `00000LGE`.
///
/// Written only by CMP, which clears all three comparison bits and then
/// sets exactly one. Read by the conditional jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    bits: u8,
}

impl Flags {
    /// E bit: operands compared equal.
    pub const EQUAL: u8 = 0b0000_0001;
    /// G bit: first operand was greater.
    pub const GREATER: u8 = 0b0000_0010;
    /// L bit: first operand was less.
    pub const LESS: u8 = 0b0000_0100;

    /// Create a cleared flags register.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Rebuild from a raw byte (used when restoring an interrupt frame).
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// The raw FL byte.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Record a comparison result: clear E/G/L, then set exactly one.
    pub fn set_compare(&mut self, a: u8, b: u8) {
        self.bits &= !(Self::EQUAL | Self::GREATER | Self::LESS);
        self.bits |= match a.cmp(&b) {
            std::cmp::Ordering::Equal => Self::EQUAL,
            std::cmp::Ordering::Greater => Self::GREATER,
            std::cmp::Ordering::Less => Self::LESS,
        };
    }

    pub fn equal(self) -> bool {
        self.bits & Self::EQUAL != 0
    }

    pub fn greater(self) -> bool {
        self.bits & Self::GREATER != 0
    }

    pub fn less(self) -> bool {
        self.bits & Self::LESS != 0
    }
}

/// The LS-8 register file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registers {
    /// R0-R7. R7 doubles as the stack pointer.
    gp: [u8; NUM_REGISTERS],

    /// PC: address of the next instruction to fetch.
    pub pc: u8,

    /// FL: comparison flags.
    pub fl: Flags,
}

impl Registers {
    /// Create a new register file in the reset state.
    pub fn new() -> Self {
        let mut gp = [0; NUM_REGISTERS];
        gp[SP as usize] = SP_INIT;
        Self {
            gp,
            pc: 0,
            fl: Flags::new(),
        }
    }

    /// Reset all registers to their power-on values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read a register by index.
    ///
    /// Operand bytes are register indices by convention, so the index is
    /// validated here rather than trusted.
    #[inline]
    pub fn get(&self, index: u8) -> Result<u8, RegisterError> {
        self.gp
            .get(index as usize)
            .copied()
            .ok_or(RegisterError::InvalidIndex(index))
    }

    /// Write a register by index.
    #[inline]
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), RegisterError> {
        let reg = self
            .gp
            .get_mut(index as usize)
            .ok_or(RegisterError::InvalidIndex(index))?;
        *reg = value;
        Ok(())
    }

    /// The current stack pointer (R7).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.gp[SP as usize]
    }

    /// Set the stack pointer (R7).
    #[inline]
    pub fn set_sp(&mut self, value: u8) {
        self.gp[SP as usize] = value;
    }

    /// Set the program counter to an absolute address.
    pub fn jump(&mut self, addr: u8) {
        self.pc = addr;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during register access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Register index is outside 0-7.
    #[error("invalid register index: {0} (valid: 0-7)")]
    InvalidIndex(u8),
}
