//! # LS-8 Emulator
//!
//! An emulator for the LS-8, a simple 8-bit register machine with 256 bytes
//! of RAM, 8 general-purpose registers, a descending hardware stack, and a
//! small fixed instruction set whose opcodes encode their own operand counts.
//!
//! The core is the fetch-decode-dispatch-execute loop in [`cpu::execute`],
//! backed by the ALU, flags, stack, and synchronous interrupt model.

pub mod cpu;
pub mod asm;

// Re-export commonly used types
pub use cpu::{Cpu, CpuError, CpuState, Flags, Instruction, Memory, Opcode, Registers};
pub use asm::{assemble, disassemble, load_image, parse_image, save_image, AssemblerError, Image};
