//! CPU emulation for the LS-8.
//!
//! This module implements the complete LS-8 architecture:
//! - 256 bytes of RAM with a descending hardware stack
//! - 8 general-purpose byte registers (R7 = SP, R5/R6 = IM/IS)
//! - 34-instruction set with self-describing opcode encodings

pub mod memory;
pub mod registers;
pub mod alu;
pub mod decode;
pub mod execute;

pub use memory::{Memory, MemoryError, MEMORY_SIZE};
pub use registers::{Flags, RegisterError, Registers};
pub use alu::AluOp;
pub use decode::{DecodeError, Instruction, Opcode};
pub use execute::{Cpu, CpuError, CpuState};
