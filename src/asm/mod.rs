//! Assembler, disassembler and program image handling for LS-8 programs.
//!
//! This module provides:
//! - The `.ls8` text image format (one binary-literal byte per line)
//! - A simple two-pass assembler (text -> program bytes)
//! - A disassembler (program bytes -> readable text)

pub mod assembler;
pub mod disasm;
pub mod image;

pub use assembler::{assemble, AssemblerError};
pub use disasm::{disassemble, disassemble_instruction};
pub use image::{load_image, parse_image, save_image, Image, ImageError};
