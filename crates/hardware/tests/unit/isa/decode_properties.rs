//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts the register fields and sign-extended
//! immediates of every E20 format, and that no word fails to decode.
//!
//! # Coverage Matrix
//!
//! - Three-register: add, sub, or, and, slt, jr, unassigned function codes
//! - Two-register:   addi, slti, lw, sw, jeq
//! - No-register:    j, jal

use e20sim_core::common::{Addr, RegIdx};
use e20sim_core::isa::{Instruction, InstructionBits, decode};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::*;

fn r(n: u16) -> RegIdx {
    RegIdx::new(n)
}

// ──────────────────────────────────────────────────────────
// Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn field_accessors_follow_layout() {
    let word: u16 = 0b101_011_110_0101101;
    assert_eq!(word.opcode(), 0b101);
    assert_eq!(word.reg_a(), r(3));
    assert_eq!(word.reg_b(), r(6));
    assert_eq!(word.imm7(), 0b0101101);
    assert_eq!(word.imm13(), word & 0x1FFF);
}

#[test]
fn three_register_fields() {
    let word = reg_func(1, 2, 3, 4);
    assert_eq!(word.reg_a(), r(1));
    assert_eq!(word.reg_b(), r(2));
    assert_eq!(word.reg_c(), r(3));
    assert_eq!(word.func(), 4);
}

// ──────────────────────────────────────────────────────────
// Three-register instructions
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(add(3, 1, 2), Instruction::Add { dst: r(3), src_a: r(1), src_b: r(2) })]
#[case(sub(4, 5, 6), Instruction::Sub { dst: r(4), src_a: r(5), src_b: r(6) })]
#[case(or(7, 0, 1), Instruction::Or { dst: r(7), src_a: r(0), src_b: r(1) })]
#[case(and(1, 2, 3), Instruction::And { dst: r(1), src_a: r(2), src_b: r(3) })]
#[case(slt(2, 3, 4), Instruction::Slt { dst: r(2), src_a: r(3), src_b: r(4) })]
#[case(jr(5), Instruction::Jr { src: r(5) })]
fn decodes_three_register(#[case] word: u16, #[case] expected: Instruction) {
    assert_eq!(decode(word), expected);
}

#[rstest]
#[case(5)]
#[case(7)]
#[case(9)]
#[case(15)]
fn unassigned_function_codes_are_unknown(#[case] func: u16) {
    let word = reg_func(1, 2, 3, func);
    assert_eq!(decode(word), Instruction::Unknown(word));
}

// ──────────────────────────────────────────────────────────
// Two-register instructions
// ──────────────────────────────────────────────────────────

#[test]
fn addi_puts_destination_in_second_field() {
    assert_eq!(
        decode(addi(1, 0, 5)),
        Instruction::Addi { dst: r(1), src: r(0), imm: 5 }
    );
}

#[test]
fn negative_immediates_are_sign_extended() {
    assert_eq!(
        decode(addi(2, 2, -1)),
        Instruction::Addi { dst: r(2), src: r(2), imm: 0xFFFF }
    );
    assert_eq!(
        decode(slti(3, 1, -64)),
        Instruction::Slti { dst: r(3), src: r(1), imm: 0xFFC0 }
    );
}

#[test]
fn memory_operands() {
    assert_eq!(
        decode(lw(2, 4, 1)),
        Instruction::Lw { dst: r(2), base: r(1), imm: 4 }
    );
    assert_eq!(
        decode(sw(6, -2, 7)),
        Instruction::Sw { src: r(6), base: r(7), imm: 0xFFFE }
    );
}

#[test]
fn jeq_operands() {
    assert_eq!(
        decode(jeq(1, 2, -3)),
        Instruction::Jeq { src_a: r(1), src_b: r(2), imm: 0xFFFD }
    );
}

// ──────────────────────────────────────────────────────────
// No-register instructions
// ──────────────────────────────────────────────────────────

#[test]
fn jump_targets_use_13_bits() {
    assert_eq!(decode(j(8191)), Instruction::J { target: Addr::new(8191) });
    assert_eq!(decode(jal(100)), Instruction::Jal { target: Addr::new(100) });
}

#[test]
fn classification_helpers() {
    assert!(decode(lw(1, 0, 0)).is_memory());
    assert!(decode(sw(1, 0, 0)).is_memory());
    assert!(!decode(add(1, 0, 0)).is_memory());
    assert!(decode(jeq(0, 0, 0)).is_control());
    assert!(decode(jr(1)).is_control());
    assert!(!decode(addi(1, 0, 1)).is_control());
}

proptest! {
    #[test]
    fn opcode_selects_variant(word in any::<u16>()) {
        let inst = decode(word);
        let matches = match word >> 13 {
            0b001 => matches!(inst, Instruction::Addi { .. }),
            0b010 => matches!(inst, Instruction::J { .. }),
            0b011 => matches!(inst, Instruction::Jal { .. }),
            0b100 => matches!(inst, Instruction::Lw { .. }),
            0b101 => matches!(inst, Instruction::Sw { .. }),
            0b110 => matches!(inst, Instruction::Jeq { .. }),
            0b111 => matches!(inst, Instruction::Slti { .. }),
            _ => !matches!(
                inst,
                Instruction::Addi { .. }
                    | Instruction::J { .. }
                    | Instruction::Jal { .. }
                    | Instruction::Lw { .. }
                    | Instruction::Sw { .. }
                    | Instruction::Jeq { .. }
                    | Instruction::Slti { .. }
            ),
        };
        prop_assert!(matches, "{word:#06x} decoded to {inst:?}");
    }
}
