use super::builder::instruction::*;
use super::harness::TestContext;
use e20sim_core::sim::loader;

#[test]
fn listing_round_trips_through_loader() {
    let words = [addi(1, 0, 5), j(1)];
    let mem = loader::load_program(listing(&words).as_bytes()).expect("listing loads");
    assert_eq!(&mem.words()[..2], &words);
}

#[test]
fn encoders_match_hand_assembled_words() {
    assert_eq!(addi(1, 0, 5), 0x2085);
    assert_eq!(addi(2, 0, 3), 0x2103);
    assert_eq!(add(3, 1, 2), 0x0530);
    assert_eq!(j(3), 0x4003);
    assert_eq!(lw(2, -1, 1), 0x857F);
}

#[test]
fn harness_registers_round_trip() {
    let mut ctx = TestContext::new();
    ctx.set_reg(4, 0xBEEF);
    assert_eq!(ctx.get_reg(4), 0xBEEF);
    ctx.set_reg(0, 0xBEEF);
    assert_eq!(ctx.get_reg(0), 0);
}
