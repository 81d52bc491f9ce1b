//! LS-8 memory subsystem.
//!
//! The LS-8 has 256 bytes of flat RAM holding both program code (loaded at
//! address 0) and a descending hardware stack in the upper region.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The number of bytes of RAM in the LS-8.
pub const MEMORY_SIZE: usize = 256;

/// LS-8 memory: 256 flat bytes.
#[derive(Clone, Serialize, Deserialize)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Create a new memory with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE],
        }
    }

    /// Read a byte by address (0-255).
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, MemoryError> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(MemoryError::AddressOutOfRange(addr))
    }

    /// Write a byte by address (0-255).
    ///
    /// Any byte value is accepted; only the address is validated.
    #[inline]
    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), MemoryError> {
        let cell = self
            .bytes
            .get_mut(addr)
            .ok_or(MemoryError::AddressOutOfRange(addr))?;
        *cell = value;
        Ok(())
    }

    /// Clear all memory to zeros.
    pub fn clear(&mut self) {
        for byte in &mut self.bytes {
            *byte = 0;
        }
    }

    /// Load a program into memory starting at the given address.
    pub fn load_program(&mut self, origin: usize, program: &[u8]) -> Result<(), MemoryError> {
        if origin + program.len() > MEMORY_SIZE {
            return Err(MemoryError::ProgramTooLarge {
                size: program.len(),
                available: MEMORY_SIZE.saturating_sub(origin),
            });
        }

        self.bytes[origin..origin + program.len()].copy_from_slice(program);

        Ok(())
    }

    /// Dump a region of memory (for debugging).
    pub fn dump(&self, start: usize, count: usize) -> Vec<(usize, u8)> {
        let end = (start + count).min(MEMORY_SIZE);
        (start..end).map(|i| (i, self.bytes[i])).collect()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only count non-zero bytes
        let non_zero = self.bytes.iter().filter(|&&b| b != 0).count();

        f.debug_struct("Memory")
            .field("non_zero_bytes", &non_zero)
            .field("total_bytes", &MEMORY_SIZE)
            .finish()
    }
}

/// Errors that can occur during memory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Address is outside valid memory range.
    #[error("memory address {0} out of range (0-255)")]
    AddressOutOfRange(usize),

    /// Program is too large to fit in memory.
    #[error("program size {size} exceeds available space {available}")]
    ProgramTooLarge { size: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write() {
        let mut mem = Memory::new();

        mem.write(10, 42).unwrap();
        assert_eq!(mem.read(10).unwrap(), 42);
    }

    #[test]
    fn test_memory_bounds() {
        let mut mem = Memory::new();

        assert!(mem.read(0).is_ok());
        assert!(mem.read(255).is_ok());
        assert_eq!(mem.read(256), Err(MemoryError::AddressOutOfRange(256)));
        assert_eq!(mem.write(300, 1), Err(MemoryError::AddressOutOfRange(300)));
    }

    #[test]
    fn test_load_program() {
        let mut mem = Memory::new();
        let program = [1, 2, 3];

        mem.load_program(0, &program).unwrap();

        assert_eq!(mem.read(0).unwrap(), 1);
        assert_eq!(mem.read(1).unwrap(), 2);
        assert_eq!(mem.read(2).unwrap(), 3);
    }

    #[test]
    fn test_load_program_too_large() {
        let mut mem = Memory::new();
        let program = vec![0u8; MEMORY_SIZE + 1];

        let err = mem.load_program(0, &program).unwrap_err();
        assert_eq!(
            err,
            MemoryError::ProgramTooLarge {
                size: MEMORY_SIZE + 1,
                available: MEMORY_SIZE,
            }
        );
    }

    #[test]
    fn test_load_program_offset_overflow() {
        let mut mem = Memory::new();
        let program = [0u8; 16];

        assert!(mem.load_program(250, &program).is_err());
        assert!(mem.load_program(240, &program).is_ok());
    }
}
