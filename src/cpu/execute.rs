//! LS-8 execution engine.
//!
//! Implements the fetch-decode-dispatch-execute cycle, the stack, and the
//! synchronous interrupt model.

use super::alu::{self, AluOp};
use super::decode::{DecodeError, Instruction, Opcode};
use super::memory::{Memory, MemoryError};
use super::registers::{Flags, RegisterError, Registers, IM, IS};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Base address of the interrupt vector table (one vector per IS bit).
pub const INTERRUPT_VECTORS: usize = 0xF8;

/// CPU execution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuState {
    /// CPU is running normally.
    Running,
    /// CPU has halted (executed HLT).
    Halted,
    /// CPU stopped on a fatal error.
    Error,
}

/// The LS-8 CPU.
#[derive(Clone, Serialize, Deserialize)]
pub struct Cpu {
    /// CPU registers (R0-R7, PC, FL).
    pub regs: Registers,
    /// Main memory.
    pub mem: Memory,
    /// Current execution state.
    pub state: CpuState,
    /// Instruction count (for profiling).
    pub cycles: u64,
    /// Whether maskable interrupts are serviced. Cleared while a handler
    /// runs, restored by IRET.
    interrupts_enabled: bool,
    /// Last executed instruction (for debugging).
    last_instr: Option<Instruction>,
}

impl Cpu {
    /// Create a new CPU in the reset state.
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            mem: Memory::new(),
            state: CpuState::Running,
            cycles: 0,
            interrupts_enabled: true,
            last_instr: None,
        }
    }

    /// Reset the CPU to its initial state.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.mem.clear();
        self.state = CpuState::Running;
        self.cycles = 0;
        self.interrupts_enabled = true;
        self.last_instr = None;
    }

    /// Load a program into memory at address 0.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        self.mem.load_program(0, program)
    }

    /// Execute a single instruction.
    ///
    /// Returns the instruction that was executed. Any error leaves the CPU
    /// stopped: `is_running()` is false before the error reaches the caller.
    pub fn step(&mut self) -> Result<Instruction, CpuError> {
        if self.state != CpuState::Running {
            return Err(CpuError::NotRunning(self.state));
        }

        match self.cycle() {
            Ok(instr) => {
                self.cycles += 1;
                self.last_instr = Some(instr);
                Ok(instr)
            }
            Err(e) => {
                self.state = CpuState::Error;
                Err(e)
            }
        }
    }

    /// Run until halt or error.
    ///
    /// Returns the number of instructions executed.
    pub fn run(&mut self) -> Result<u64, CpuError> {
        let start_cycles = self.cycles;

        while self.state == CpuState::Running {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Run for at most `max_cycles` instructions.
    pub fn run_limited(&mut self, max_cycles: u64) -> Result<u64, CpuError> {
        let start_cycles = self.cycles;
        let limit = self.cycles + max_cycles;

        while self.state == CpuState::Running && self.cycles < limit {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// One fetch-decode-dispatch-execute cycle.
    fn cycle(&mut self) -> Result<Instruction, CpuError> {
        self.service_interrupts()?;

        // Fetch
        let pc = self.regs.pc;
        let ir = self.mem.read(pc as usize)?;

        // Decode; both operand slots are always fetched, the opcode's arity
        // decides which ones the handler reads. The address wraps like the
        // 8-bit bus it models.
        let opcode = Opcode::from_u8(ir)?;
        let operand_a = self.mem.read(pc.wrapping_add(1) as usize)?;
        let operand_b = self.mem.read(pc.wrapping_add(2) as usize)?;
        let instr = Instruction {
            opcode,
            operand_a,
            operand_b,
        };

        // Execute
        self.execute(instr)?;

        // Control-transfer instructions have already set the PC
        if !opcode.sets_pc() {
            self.regs.pc = pc.wrapping_add(1 + opcode.operand_count());
        }

        Ok(instr)
    }

    /// Service the highest-priority pending maskable interrupt, if any.
    ///
    /// Pushes PC, FL, then R0-R6 and vectors through the table at 0xF8.
    /// Further interrupts stay disabled until the handler executes IRET.
    fn service_interrupts(&mut self) -> Result<(), CpuError> {
        if !self.interrupts_enabled {
            return Ok(());
        }

        let masked = self.regs.get(IM)? & self.regs.get(IS)?;
        if masked == 0 {
            return Ok(());
        }

        let n = masked.trailing_zeros() as u8;
        let is = self.regs.get(IS)?;
        self.regs.set(IS, is & !(1 << n))?;
        self.interrupts_enabled = false;

        self.push(self.regs.pc)?;
        self.push(self.regs.fl.bits())?;
        for i in 0..=6 {
            let value = self.regs.get(i)?;
            self.push(value)?;
        }

        self.regs.pc = self.mem.read(INTERRUPT_VECTORS + n as usize)?;

        Ok(())
    }

    /// Execute a decoded instruction.
    fn execute(&mut self, instr: Instruction) -> Result<(), CpuError> {
        let a = instr.operand_a;
        let b = instr.operand_b;

        match instr.opcode {
            // ==================== Machine Control ====================

            Opcode::Nop => {}

            Opcode::Hlt => {
                self.state = CpuState::Halted;
            }

            // ==================== Data Transfer ====================

            Opcode::Ldi => {
                self.regs.set(a, b)?;
            }

            Opcode::Ld => {
                let addr = self.regs.get(b)?;
                let value = self.mem.read(addr as usize)?;
                self.regs.set(a, value)?;
            }

            Opcode::St => {
                let addr = self.regs.get(a)?;
                let value = self.regs.get(b)?;
                self.mem.write(addr as usize, value)?;
            }

            // ==================== I/O ====================

            Opcode::Prn => {
                let value = self.regs.get(a)?;
                println!("{}", value);
            }

            Opcode::Pra => {
                use std::io::Write;
                let value = self.regs.get(a)?;
                print!("{}", value as char);
                // No newline follows, so the byte must not sit in the buffer
                let _ = std::io::stdout().flush();
            }

            // ==================== Stack ====================

            Opcode::Push => {
                let value = self.regs.get(a)?;
                self.push(value)?;
            }

            Opcode::Pop => {
                let value = self.pop()?;
                self.regs.set(a, value)?;
            }

            // ==================== Subroutines ====================

            Opcode::Call => {
                // Return address is the instruction after CALL
                self.push(self.regs.pc.wrapping_add(2))?;
                self.regs.pc = self.regs.get(a)?;
            }

            Opcode::Ret => {
                let addr = self.pop()?;
                self.regs.pc = addr;
            }

            // ==================== Interrupts ====================

            Opcode::Int => {
                let bit = self.regs.get(a)?;
                let is = self.regs.get(IS)?;
                self.regs.set(IS, is | 1u8.checked_shl(bit as u32).unwrap_or(0))?;
            }

            Opcode::Iret => {
                // Unwind the frame built by service_interrupts
                for i in (0..=6).rev() {
                    let value = self.pop()?;
                    self.regs.set(i, value)?;
                }
                let fl = self.pop()?;
                self.regs.fl = Flags::from_bits(fl);
                self.regs.pc = self.pop()?;
                self.interrupts_enabled = true;
            }

            // ==================== Jumps ====================

            Opcode::Jmp => {
                let addr = self.regs.get(a)?;
                self.regs.jump(addr);
            }

            Opcode::Jeq => {
                let taken = self.regs.fl.equal();
                self.branch_if(a, taken)?;
            }

            Opcode::Jne => {
                let taken = !self.regs.fl.equal();
                self.branch_if(a, taken)?;
            }

            Opcode::Jgt => {
                let taken = self.regs.fl.greater();
                self.branch_if(a, taken)?;
            }

            Opcode::Jge => {
                let taken = self.regs.fl.greater() || self.regs.fl.equal();
                self.branch_if(a, taken)?;
            }

            Opcode::Jlt => {
                let taken = self.regs.fl.less();
                self.branch_if(a, taken)?;
            }

            Opcode::Jle => {
                let taken = self.regs.fl.less() || self.regs.fl.equal();
                self.branch_if(a, taken)?;
            }

            // ==================== ALU ====================

            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Inc
            | Opcode::Dec
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Cmp => {
                let op = AluOp::from_opcode(instr.opcode)
                    .ok_or(CpuError::UnsupportedAluOperation(instr.opcode))?;
                alu::apply(op, a, b, &mut self.regs)?;
            }
        }

        Ok(())
    }

    /// Resolve a conditional jump: jump through the register when the flag
    /// test passed, otherwise skip past the two-byte instruction.
    fn branch_if(&mut self, reg: u8, taken: bool) -> Result<(), CpuError> {
        if taken {
            let addr = self.regs.get(reg)?;
            self.regs.jump(addr);
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(2);
        }
        Ok(())
    }

    /// Push a byte onto the hardware stack.
    fn push(&mut self, value: u8) -> Result<(), CpuError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.mem.write(sp as usize, value)?;
        Ok(())
    }

    /// Pop a byte off the hardware stack.
    fn pop(&mut self) -> Result<u8, CpuError> {
        let sp = self.regs.sp();
        let value = self.mem.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }

    /// Get the last executed instruction.
    pub fn last_instruction(&self) -> Option<Instruction> {
        self.last_instr
    }

    /// Check if the CPU halted via HLT.
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Check if the CPU is running.
    pub fn is_running(&self) -> bool {
        self.state == CpuState::Running
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("state", &self.state)
            .field("cycles", &self.cycles)
            .field("regs", &self.regs)
            .finish()
    }
}

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Error)]
pub enum CpuError {
    #[error("CPU not running: {0:?}")]
    NotRunning(CpuState),

    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("register error: {0}")]
    Register(#[from] RegisterError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("unsupported ALU operation: {0:?}")]
    UnsupportedAluOperation(Opcode),

    #[error("divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::registers::SP_INIT;

    const LDI: u8 = Opcode::Ldi as u8;
    const HLT: u8 = Opcode::Hlt as u8;
    const MUL: u8 = Opcode::Mul as u8;
    const PRN: u8 = Opcode::Prn as u8;
    const PRA: u8 = Opcode::Pra as u8;
    const DIV: u8 = Opcode::Div as u8;
    const PUSH: u8 = Opcode::Push as u8;
    const POP: u8 = Opcode::Pop as u8;
    const CALL: u8 = Opcode::Call as u8;
    const RET: u8 = Opcode::Ret as u8;
    const CMP: u8 = Opcode::Cmp as u8;
    const JEQ: u8 = Opcode::Jeq as u8;
    const JNE: u8 = Opcode::Jne as u8;
    const JGT: u8 = Opcode::Jgt as u8;
    const JGE: u8 = Opcode::Jge as u8;
    const JLT: u8 = Opcode::Jlt as u8;
    const JLE: u8 = Opcode::Jle as u8;
    const LD: u8 = Opcode::Ld as u8;
    const ST: u8 = Opcode::St as u8;
    const INT: u8 = Opcode::Int as u8;
    const IRET: u8 = Opcode::Iret as u8;

    fn cpu_with(program: &[u8]) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.load_program(program).unwrap();
        cpu
    }

    #[test]
    fn test_hlt_single_cycle() {
        let mut cpu = cpu_with(&[HLT]);

        let executed = cpu.run().unwrap();

        assert_eq!(executed, 1);
        assert_eq!(cpu.regs.pc, 1);
        assert!(cpu.is_halted());
        assert!(!cpu.is_running());
    }

    #[test]
    fn test_ldi_mul_prn() {
        // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
        let mut cpu = cpu_with(&[LDI, 0, 8, LDI, 1, 9, MUL, 0, 1, PRN, 0, HLT]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(0).unwrap(), 72);
        assert!(cpu.is_halted());
    }

    #[test]
    fn test_pra_halts_cleanly_without_newline() {
        // LDI R0,'H'; PRA R0; HLT -- the character is written and flushed
        // even though no newline ever follows
        let mut cpu = cpu_with(&[LDI, 0, b'H', PRA, 0, HLT]);

        cpu.run().unwrap();

        assert!(cpu.is_halted());
        assert_eq!(cpu.regs.pc, 6);
    }

    #[test]
    fn test_div_by_zero_halts_and_reports() {
        // LDI R0,10; LDI R1,0; DIV R0,R1; HLT
        let mut cpu = cpu_with(&[LDI, 0, 10, LDI, 1, 0, DIV, 0, 1, HLT]);

        let err = cpu.run().unwrap_err();

        assert!(matches!(err, CpuError::DivisionByZero));
        assert!(!cpu.is_running());
    }

    #[test]
    fn test_undefined_opcode() {
        let mut cpu = cpu_with(&[0xFF]);

        let err = cpu.run().unwrap_err();

        assert!(matches!(
            err,
            CpuError::Decode(DecodeError::UndefinedOpcode(0xFF))
        ));
        assert!(!cpu.is_running());
    }

    #[test]
    fn test_step_refused_after_halt() {
        let mut cpu = cpu_with(&[HLT]);
        cpu.run().unwrap();

        let err = cpu.step().unwrap_err();
        assert!(matches!(err, CpuError::NotRunning(CpuState::Halted)));
    }

    #[test]
    fn test_push_pop_roundtrip() {
        // LDI R0,42; PUSH R0; LDI R0,0; POP R0; HLT
        let mut cpu = cpu_with(&[LDI, 0, 42, PUSH, 0, LDI, 0, 0, POP, 0, HLT]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(0).unwrap(), 42);
        assert_eq!(cpu.regs.sp(), SP_INIT);
    }

    #[test]
    fn test_push_writes_below_sp() {
        let mut cpu = cpu_with(&[LDI, 0, 99, PUSH, 0, HLT]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.sp(), SP_INIT - 1);
        assert_eq!(cpu.mem.read((SP_INIT - 1) as usize).unwrap(), 99);
    }

    #[test]
    fn test_call_ret() {
        // 0: LDI R1,6      (subroutine address)
        // 3: CALL R1
        // 5: HLT
        // 6: LDI R0,7
        // 9: RET
        let mut cpu = cpu_with(&[LDI, 1, 6, CALL, 1, HLT, LDI, 0, 7, RET]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(0).unwrap(), 7);
        assert!(cpu.is_halted());
        // RET returned to the HLT right after the CALL, stack fully unwound
        assert_eq!(cpu.regs.pc, 6);
        assert_eq!(cpu.regs.sp(), SP_INIT);
    }

    #[test]
    fn test_cmp_jeq_taken() {
        // 0: LDI R0,5; 3: LDI R1,5; 6: LDI R2,15; 9: CMP R0,R1;
        // 12: JEQ R2; 14: HLT (fallthrough); 15: LDI R3,1; 18: HLT
        let mut cpu = cpu_with(&[
            LDI, 0, 5, LDI, 1, 5, LDI, 2, 15, CMP, 0, 1, JEQ, 2, HLT, LDI, 3, 1, HLT,
        ]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(3).unwrap(), 1);
        assert!(cpu.is_halted());
    }

    #[test]
    fn test_cmp_jeq_not_taken() {
        // 0: LDI R0,5; 3: LDI R1,6; 6: LDI R2,15; 9: CMP R0,R1;
        // 12: JEQ R2; 14: HLT; 15: LDI R3,1; 18: HLT
        let mut cpu = cpu_with(&[
            LDI, 0, 5, LDI, 1, 6, LDI, 2, 15, CMP, 0, 1, JEQ, 2, HLT, LDI, 3, 1, HLT,
        ]);

        cpu.run().unwrap();

        // Branch not taken: fell through to the HLT at 14
        assert_eq!(cpu.regs.get(3).unwrap(), 0);
        assert_eq!(cpu.regs.pc, 15);
    }

    #[test]
    fn test_cmp_jne_taken() {
        let mut cpu = cpu_with(&[
            LDI, 0, 5, LDI, 1, 6, LDI, 2, 15, CMP, 0, 1, JNE, 2, HLT, LDI, 3, 1, HLT,
        ]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(3).unwrap(), 1);
    }

    /// Run `CMP Ra,Rb; Jxx` with the standard layout and report whether the
    /// branch was taken (R3 is only set at the jump target).
    fn branch_taken(jump: u8, a: u8, b: u8) -> bool {
        // 0: LDI R0,a; 3: LDI R1,b; 6: LDI R2,15; 9: CMP R0,R1;
        // 12: Jxx R2; 14: HLT (fallthrough); 15: LDI R3,1; 18: HLT
        let mut cpu = cpu_with(&[
            LDI, 0, a, LDI, 1, b, LDI, 2, 15, CMP, 0, 1, jump, 2, HLT, LDI, 3, 1, HLT,
        ]);
        cpu.run().unwrap();
        cpu.regs.get(3).unwrap() == 1
    }

    #[test]
    fn test_jgt() {
        assert!(branch_taken(JGT, 9, 3));
        assert!(!branch_taken(JGT, 3, 3));
        assert!(!branch_taken(JGT, 3, 9));
    }

    #[test]
    fn test_jge() {
        assert!(branch_taken(JGE, 9, 3));
        assert!(branch_taken(JGE, 3, 3));
        assert!(!branch_taken(JGE, 3, 9));
    }

    #[test]
    fn test_jlt() {
        assert!(branch_taken(JLT, 3, 9));
        assert!(!branch_taken(JLT, 3, 3));
        assert!(!branch_taken(JLT, 9, 3));
    }

    #[test]
    fn test_jlt_reads_less_bit() {
        // JLT keys on the L bit that CMP actually sets, not a fourth flag bit
        let mut cpu = cpu_with(&[
            LDI, 0, 3, LDI, 1, 9, LDI, 2, 15, CMP, 0, 1, JLT, 2, HLT, LDI, 3, 1, HLT,
        ]);
        cpu.run().unwrap();

        assert_eq!(cpu.regs.fl.bits(), Flags::LESS);
        assert_eq!(cpu.regs.get(3).unwrap(), 1);
    }

    #[test]
    fn test_jle() {
        assert!(branch_taken(JLE, 3, 9));
        assert!(branch_taken(JLE, 3, 3));
        assert!(!branch_taken(JLE, 9, 3));
    }

    #[test]
    fn test_ld_st() {
        // LDI R0,200 (address); LDI R1,77; ST R0,R1; LDI R2,200; LD R3,R2; HLT
        let mut cpu = cpu_with(&[
            LDI, 0, 200, LDI, 1, 77, ST, 0, 1, LDI, 2, 200, LD, 3, 2, HLT,
        ]);

        cpu.run().unwrap();

        assert_eq!(cpu.mem.read(200).unwrap(), 77);
        assert_eq!(cpu.regs.get(3).unwrap(), 77);
    }

    #[test]
    fn test_int_sets_status_bit() {
        // LDI R0,2; INT R0; HLT  -- IM is clear so nothing is serviced
        let mut cpu = cpu_with(&[LDI, 0, 2, INT, 0, HLT]);

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(IS).unwrap(), 0b100);
        assert!(cpu.is_halted());
    }

    #[test]
    fn test_interrupt_dispatch_and_iret() {
        // Main:    0: LDI R5,1 (unmask interrupt 0); 3: LDI R0,0;
        //          6: INT R0; 8: LDI R1,42; 11: HLT
        // Handler: 20: LDI R2,9; 23: LDI R3,200; 26: ST R3,R2; 29: IRET
        // Vector 0 at 0xF8 points at the handler. IRET restores every
        // register from the frame, so the handler leaves its mark in memory.
        let mut cpu = cpu_with(&[
            LDI, 5, 1, LDI, 0, 0, INT, 0, LDI, 1, 42, HLT,
        ]);
        cpu.mem
            .load_program(20, &[LDI, 2, 9, LDI, 3, 200, ST, 3, 2, IRET])
            .unwrap();
        cpu.mem.write(INTERRUPT_VECTORS, 20).unwrap();

        cpu.run().unwrap();

        // Handler ran, then execution resumed and finished the main program
        assert_eq!(cpu.mem.read(200).unwrap(), 9);
        assert_eq!(cpu.regs.get(1).unwrap(), 42);
        // The handler's register scratch was rolled back with the frame
        assert_eq!(cpu.regs.get(2).unwrap(), 0);
        assert!(cpu.is_halted());
        // IS bit consumed, frame fully unwound
        assert_eq!(cpu.regs.get(IS).unwrap(), 0);
        assert_eq!(cpu.regs.sp(), SP_INIT);
    }

    #[test]
    fn test_interrupt_frame_preserves_registers() {
        // Handler clobbers R0-R4; IRET must restore them.
        let mut cpu = cpu_with(&[
            LDI, 5, 1, LDI, 3, 77, LDI, 0, 0, INT, 0, HLT,
        ]);
        cpu.mem
            .load_program(30, &[LDI, 3, 0, LDI, 0, 255, IRET])
            .unwrap();
        cpu.mem.write(INTERRUPT_VECTORS, 30).unwrap();

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(3).unwrap(), 77);
        assert_eq!(cpu.regs.get(0).unwrap(), 0);
    }

    #[test]
    fn test_masked_interrupt_not_serviced() {
        // IM stays 0: raising IS bit 0 must not vector anywhere
        let mut cpu = cpu_with(&[LDI, 0, 0, INT, 0, HLT]);
        cpu.mem.write(INTERRUPT_VECTORS, 99).unwrap();

        cpu.run().unwrap();

        assert_eq!(cpu.regs.get(IS).unwrap(), 1);
        assert_eq!(cpu.regs.pc, 6);
    }

    #[test]
    fn test_run_limited() {
        // Infinite loop: LDI R0,0; JMP R0
        let mut cpu = cpu_with(&[LDI, 0, 0, Opcode::Jmp as u8, 0]);

        let executed = cpu.run_limited(10).unwrap();

        assert_eq!(executed, 10);
        assert!(cpu.is_running());
    }

    #[test]
    fn test_reset() {
        let mut cpu = cpu_with(&[LDI, 0, 8, HLT]);
        cpu.run().unwrap();

        cpu.reset();

        assert!(cpu.is_running());
        assert_eq!(cpu.cycles, 0);
        assert_eq!(cpu.regs.get(0).unwrap(), 0);
        assert_eq!(cpu.regs.sp(), SP_INIT);
        assert_eq!(cpu.mem.read(0).unwrap(), 0);
    }

    proptest::proptest! {
        #[test]
        fn prop_push_pop_roundtrip(value: u8, reg in 0u8..5) {
            let mut cpu = cpu_with(&[LDI, reg, value, PUSH, reg, LDI, reg, 0, POP, reg, HLT]);
            cpu.run().unwrap();
            proptest::prop_assert_eq!(cpu.regs.get(reg).unwrap(), value);
            proptest::prop_assert_eq!(cpu.regs.sp(), SP_INIT);
        }
    }
}
