//! Simple two-pass assembler for LS-8 programs.
//!
//! Syntax:
//! ```text
//! # Comment
//! LOOP:           # Define a label
//!     LDI R0,8    # Load immediate
//!     LDI R1,LOOP # Labels resolve to addresses
//!     PUSH R0
//!     JMP R1
//!     HLT
//!     DB 42       # Define a data byte
//! ```

use crate::cpu::decode::Opcode;
use std::collections::HashMap;
use thiserror::Error;

/// Assemble source code to program bytes.
pub fn assemble(source: &str) -> Result<Vec<u8>, AssemblerError> {
    let mut asm = Assembler::new();
    asm.assemble(source)
}

/// The assembler state.
struct Assembler {
    /// Symbol table (label -> address).
    symbols: HashMap<String, u8>,
    /// Forward references: (output byte index, label, source line).
    pending: Vec<(usize, String, usize)>,
    /// Output bytes.
    output: Vec<u8>,
}

impl Assembler {
    fn new() -> Self {
        Self {
            symbols: HashMap::new(),
            pending: Vec::new(),
            output: Vec::new(),
        }
    }

    fn assemble(&mut self, source: &str) -> Result<Vec<u8>, AssemblerError> {
        // Pass 1: collect labels and generate code
        for (line_num, line) in source.lines().enumerate() {
            self.process_line(line, line_num + 1)?;
        }

        // Pass 2: patch label references
        self.resolve_references()?;

        Ok(self.output.clone())
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), AssemblerError> {
        // Strip comments
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            return Ok(());
        }

        // Label definition, optionally followed by an instruction
        if let Some(colon_idx) = line.find(':') {
            let label = line[..colon_idx].trim().to_uppercase();
            if !label.is_empty() {
                let addr = self.current_addr(line_num)?;
                self.symbols.insert(label, addr);
            }

            let rest = line[colon_idx + 1..].trim();
            if !rest.is_empty() {
                return self.process_instruction(rest, line_num);
            }
            return Ok(());
        }

        self.process_instruction(line, line_num)
    }

    fn process_instruction(&mut self, line: &str, line_num: usize) -> Result<(), AssemblerError> {
        let (mnemonic, operand_text) = match line.split_once(char::is_whitespace) {
            Some((m, rest)) => (m.to_uppercase(), rest.trim()),
            None => (line.to_uppercase(), ""),
        };

        let operands: Vec<&str> = if operand_text.is_empty() {
            Vec::new()
        } else {
            operand_text.split(',').map(str::trim).collect()
        };

        // Data directive
        if mnemonic == "DB" || mnemonic == "DAT" {
            let operand = operands.first().ok_or_else(|| AssemblerError::SyntaxError {
                line: line_num,
                message: "DB requires a value".into(),
            })?;
            let value = self.parse_operand(operand, line_num)?;
            self.output.push(value);
            return Ok(());
        }

        let opcode =
            Opcode::from_mnemonic(&mnemonic).ok_or_else(|| AssemblerError::UnknownMnemonic {
                line: line_num,
                mnemonic: mnemonic.clone(),
            })?;

        if operands.len() != opcode.operand_count() as usize {
            return Err(AssemblerError::SyntaxError {
                line: line_num,
                message: format!(
                    "{} takes {} operand(s), found {}",
                    mnemonic,
                    opcode.operand_count(),
                    operands.len()
                ),
            });
        }

        self.output.push(opcode as u8);
        for operand in operands {
            let byte = self.parse_operand(operand, line_num)?;
            self.output.push(byte);
        }

        Ok(())
    }

    /// Parse one operand to a byte: a register (`R0`-`R7`), a numeric
    /// literal (decimal, `0x`, `0b`), or a label reference patched in pass 2.
    fn parse_operand(&mut self, operand: &str, line_num: usize) -> Result<u8, AssemblerError> {
        let operand = operand.trim();

        // Register operand
        if let Some(digit) = operand
            .strip_prefix('R')
            .or_else(|| operand.strip_prefix('r'))
        {
            if let Ok(index) = digit.parse::<u8>() {
                if index > 7 {
                    return Err(AssemblerError::SyntaxError {
                        line: line_num,
                        message: format!("no such register: {}", operand),
                    });
                }
                return Ok(index);
            }
        }

        // Numeric literal
        let parsed = if let Some(hex) = operand.strip_prefix("0x").or_else(|| operand.strip_prefix("0X")) {
            Some(i64::from_str_radix(hex, 16))
        } else if let Some(bin) = operand.strip_prefix("0b").or_else(|| operand.strip_prefix("0B")) {
            Some(i64::from_str_radix(bin, 2))
        } else if operand.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '-') {
            Some(operand.parse::<i64>())
        } else {
            None
        };

        if let Some(result) = parsed {
            let value = result.map_err(|_| AssemblerError::SyntaxError {
                line: line_num,
                message: format!("invalid numeric literal: {}", operand),
            })?;
            return u8::try_from(value).map_err(|_| AssemblerError::ValueOutOfRange {
                line: line_num,
                value,
            });
        }

        // Label reference: emit a placeholder and patch in pass 2
        self.pending
            .push((self.output.len(), operand.to_uppercase(), line_num));
        Ok(0)
    }

    fn current_addr(&self, line_num: usize) -> Result<u8, AssemblerError> {
        u8::try_from(self.output.len()).map_err(|_| AssemblerError::ValueOutOfRange {
            line: line_num,
            value: self.output.len() as i64,
        })
    }

    fn resolve_references(&mut self) -> Result<(), AssemblerError> {
        for (byte_idx, label, line_num) in &self.pending {
            let addr = self
                .symbols
                .get(label)
                .ok_or_else(|| AssemblerError::UndefinedLabel {
                    line: *line_num,
                    label: label.clone(),
                })?;
            self.output[*byte_idx] = *addr;
        }
        Ok(())
    }
}

/// Errors that can occur during assembly.
#[derive(Debug, Clone, Error)]
pub enum AssemblerError {
    #[error("syntax error on line {line}: {message}")]
    SyntaxError { line: usize, message: String },

    #[error("unknown mnemonic on line {line}: {mnemonic}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("undefined label on line {line}: {label}")]
    UndefinedLabel { line: usize, label: String },

    #[error("value out of range on line {line}: {value}")]
    ValueOutOfRange { line: usize, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_simple() {
        let source = r#"
            # multiply 8 by 9 and print
            LDI R0,8
            LDI R1,9
            MUL R0,R1
            PRN R0
            HLT
        "#;

        let bytes = assemble(source).unwrap();
        assert_eq!(
            bytes,
            vec![0x82, 0, 8, 0x82, 1, 9, 0xA2, 0, 1, 0x47, 0, 0x01]
        );
    }

    #[test]
    fn test_assemble_with_labels() {
        let source = r#"
            LDI R0,LOOP
        LOOP:
            JMP R0
        "#;

        let bytes = assemble(source).unwrap();
        // LOOP sits right after the 3-byte LDI
        assert_eq!(bytes, vec![0x82, 0, 3, 0x54, 0]);
    }

    #[test]
    fn test_assemble_forward_and_back_references() {
        let source = r#"
        START:
            LDI R0,END
            LDI R1,START
            JMP R0
        END:
            HLT
        "#;

        let bytes = assemble(source).unwrap();
        assert_eq!(bytes[2], 8); // END
        assert_eq!(bytes[5], 0); // START
    }

    #[test]
    fn test_assemble_data_directive() {
        let source = "DB 42\nDB 0xFF\nDB 0b101\n";

        let bytes = assemble(source).unwrap();
        assert_eq!(bytes, vec![42, 0xFF, 0b101]);
    }

    #[test]
    fn test_unknown_mnemonic() {
        let err = assemble("FROB R0\n").unwrap_err();
        assert!(matches!(err, AssemblerError::UnknownMnemonic { .. }));
    }

    #[test]
    fn test_wrong_operand_count() {
        let err = assemble("LDI R0\n").unwrap_err();
        assert!(matches!(err, AssemblerError::SyntaxError { .. }));
    }

    #[test]
    fn test_undefined_label() {
        let err = assemble("LDI R0,NOWHERE\n").unwrap_err();
        assert!(matches!(err, AssemblerError::UndefinedLabel { .. }));
    }

    #[test]
    fn test_value_out_of_range() {
        let err = assemble("LDI R0,300\n").unwrap_err();
        assert!(matches!(err, AssemblerError::ValueOutOfRange { value: 300, .. }));
    }

    #[test]
    fn test_bad_register() {
        let err = assemble("PUSH R9\n").unwrap_err();
        assert!(matches!(err, AssemblerError::SyntaxError { .. }));
    }
}
