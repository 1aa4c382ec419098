//! Instruction Execution.
//!
//! Implements the fetch-decode-execute step of the E20. It performs:
//! 1. **Fetch:** Reads the word at `pc`.
//! 2. **Decode:** Turns it into a typed [`Instruction`].
//! 3. **Execute:** Applies the effect with 16-bit wrapping arithmetic, never writing `$0`.
//! 4. **Control flow:** Advances or redirects `pc` and detects the self-jump halt.
//!
//! Because `pc` is an [`Addr`], every new value is masked to 13 bits whether or
//! not a cache hierarchy is attached.

use tracing::{debug, trace};

use crate::common::{Addr, RegIdx};
use crate::core::cpu::{Cpu, RunState};
use crate::core::traits::MemoryObserver;
use crate::isa::{Instruction, decode};

impl Cpu {
    /// Reads the instruction word at `pc`. No side effects.
    #[inline(always)]
    pub fn fetch(&self) -> u16 {
        self.mem.read(self.pc)
    }

    /// Executes exactly one instruction.
    ///
    /// Does nothing once the machine has halted.
    ///
    /// # Arguments
    ///
    /// * `observer` - Receives the data access of a `lw` or `sw`.
    ///
    /// # Returns
    ///
    /// The run state after the instruction.
    pub fn step(&mut self, observer: &mut dyn MemoryObserver) -> RunState {
        if self.is_halted() {
            return self.state;
        }

        let word = self.fetch();
        let inst = decode(word);
        trace!(pc = self.pc.val(), word, "{inst}");

        self.stats.record_instruction(&inst);
        self.execute(inst, observer);
        self.state
    }

    /// Applies one decoded instruction to the machine state.
    fn execute(&mut self, inst: Instruction, observer: &mut dyn MemoryObserver) {
        let next = self.pc.wrapping_next();

        match inst {
            Instruction::Add { dst, src_a, src_b } => {
                self.alu(dst, src_a, src_b, u16::wrapping_add);
            }
            Instruction::Sub { dst, src_a, src_b } => {
                self.alu(dst, src_a, src_b, u16::wrapping_sub);
            }
            Instruction::Or { dst, src_a, src_b } => self.alu(dst, src_a, src_b, |a, b| a | b),
            Instruction::And { dst, src_a, src_b } => self.alu(dst, src_a, src_b, |a, b| a & b),
            Instruction::Slt { dst, src_a, src_b } => {
                self.alu(dst, src_a, src_b, |a, b| u16::from(a < b));
            }
            Instruction::Jr { src } => {
                self.pc = Addr::new(self.regs.read(src));
                return;
            }
            Instruction::Addi { dst, src, imm } => {
                self.regs.write(dst, self.regs.read(src).wrapping_add(imm));
            }
            Instruction::Slti { dst, src, imm } => {
                self.regs.write(dst, u16::from(self.regs.read(src) < imm));
            }
            Instruction::Lw { dst, base, imm } => {
                let addr = self.effective_address(base, imm);
                let val = self.load_word(addr, observer);
                self.regs.write(dst, val);
            }
            Instruction::Sw { src, base, imm } => {
                let addr = self.effective_address(base, imm);
                let val = self.regs.read(src);
                self.store_word(addr, val, observer);
            }
            Instruction::Jeq { src_a, src_b, imm } => {
                let taken = self.regs.read(src_a) == self.regs.read(src_b);
                if taken {
                    self.stats.branches_taken += 1;
                    self.pc = next.wrapping_offset(imm);
                    return;
                }
            }
            Instruction::J { target } => {
                if target == self.pc {
                    debug!(pc = self.pc.val(), "halt");
                    self.state = RunState::Halted;
                } else {
                    self.pc = target;
                }
                return;
            }
            Instruction::Jal { target } => {
                self.regs.write(RegIdx::LINK, self.pc.val().wrapping_add(1));
                self.pc = target;
                return;
            }
            Instruction::Unknown(_) => {}
        }

        self.pc = next;
    }

    /// Executes a three-register ALU operation.
    #[inline(always)]
    fn alu(&mut self, dst: RegIdx, src_a: RegIdx, src_b: RegIdx, op: impl Fn(u16, u16) -> u16) {
        let result = op(self.regs.read(src_a), self.regs.read(src_b));
        self.regs.write(dst, result);
    }
}
