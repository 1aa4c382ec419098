//! E20 instruction encoders.
//!
//! Each helper takes operands in assembler order (`add $dst, $a, $b`,
//! `lw $dst, imm($base)`) and places them in the encoded fields.

use e20sim_core::isa::{funct, opcodes};

fn reg3(opcode: u16, a: u16, b: u16, dst: u16, func: u16) -> u16 {
    (opcode & 0x7) << 13 | (a & 0x7) << 10 | (b & 0x7) << 7 | (dst & 0x7) << 4 | (func & 0xF)
}

fn reg2(opcode: u16, a: u16, b: u16, imm: i16) -> u16 {
    (opcode & 0x7) << 13 | (a & 0x7) << 10 | (b & 0x7) << 7 | (imm as u16 & 0x7F)
}

fn reg0(opcode: u16, imm: u16) -> u16 {
    (opcode & 0x7) << 13 | (imm & 0x1FFF)
}

pub fn add(dst: u16, a: u16, b: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, funct::ADD)
}

pub fn sub(dst: u16, a: u16, b: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, funct::SUB)
}

pub fn or(dst: u16, a: u16, b: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, funct::OR)
}

pub fn and(dst: u16, a: u16, b: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, funct::AND)
}

pub fn slt(dst: u16, a: u16, b: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, funct::SLT)
}

pub fn jr(a: u16) -> u16 {
    reg3(opcodes::OP_REG, a, 0, 0, funct::JR)
}

/// Three-register word with an arbitrary function code.
pub fn reg_func(a: u16, b: u16, dst: u16, func: u16) -> u16 {
    reg3(opcodes::OP_REG, a, b, dst, func)
}

pub fn addi(dst: u16, src: u16, imm: i16) -> u16 {
    reg2(opcodes::OP_ADDI, src, dst, imm)
}

pub fn slti(dst: u16, src: u16, imm: i16) -> u16 {
    reg2(opcodes::OP_SLTI, src, dst, imm)
}

pub fn lw(dst: u16, imm: i16, base: u16) -> u16 {
    reg2(opcodes::OP_LW, base, dst, imm)
}

pub fn sw(src: u16, imm: i16, base: u16) -> u16 {
    reg2(opcodes::OP_SW, base, src, imm)
}

pub fn jeq(a: u16, b: u16, imm: i16) -> u16 {
    reg2(opcodes::OP_JEQ, a, b, imm)
}

pub fn j(target: u16) -> u16 {
    reg0(opcodes::OP_J, target)
}

pub fn jal(target: u16) -> u16 {
    reg0(opcodes::OP_JAL, target)
}

/// Renders words as a loader listing starting at address 0.
pub fn listing(words: &[u16]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| format!("ram[{i}] = 16'b{w:016b};\n"))
        .collect()
}
