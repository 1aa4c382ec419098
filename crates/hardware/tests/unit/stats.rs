//! Statistics Verification.

use e20sim_core::core::units::cache::{CacheLevel, Outcome};
use e20sim_core::isa::decode;
use e20sim_core::stats::{CacheCounters, SimStats};

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn instruction_mix_is_classified() {
    let mut stats = SimStats::new();
    for word in [
        add(1, 2, 3),
        slt(1, 2, 3),
        addi(1, 0, 1),
        slti(1, 0, 1),
        lw(1, 0, 0),
        sw(1, 0, 0),
        jeq(0, 0, 0),
        jr(1),
        j(0),
        jal(0),
        reg_func(0, 0, 0, 0xF),
    ] {
        stats.record_instruction(&decode(word));
    }
    assert_eq!(stats.instructions_retired, 11);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_imm, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_control, 4);
    assert_eq!(stats.inst_unknown, 1);
}

#[test]
fn cache_outcomes_go_to_their_level() {
    let mut stats = SimStats::new();
    stats.record_cache(CacheLevel::L1, Outcome::Hit);
    stats.record_cache(CacheLevel::L1, Outcome::Miss);
    stats.record_cache(CacheLevel::L2, Outcome::Miss);
    stats.record_cache(CacheLevel::L2, Outcome::Store);

    assert_eq!(
        stats.l1,
        CacheCounters {
            hits: 1,
            misses: 1,
            stores: 0
        }
    );
    assert_eq!(stats.l1.hit_rate(), Some(0.5));
    assert_eq!(stats.l2.hit_rate(), Some(0.0));
    assert_eq!(stats.l2.stores, 1);
}

#[test]
fn hit_rate_without_loads_is_none() {
    assert_eq!(CacheCounters::default().hit_rate(), None);
}

#[test]
fn summary_lists_counts_and_skips_idle_levels() {
    let mut ctx = TestContext::with_cache("8,2,2").load_program(&[lw(1, 3, 0), lw(1, 3, 0), j(2)]);
    let _ = ctx.run();
    let text = ctx.cpu().stats.to_string();

    assert!(text.contains("instructions retired     3"));
    assert!(text.contains("L1  hits 1 "));
    assert!(text.contains("hit rate 50.00%"));
    assert!(!text.contains("L2"));
}

#[test]
fn taken_branches_are_counted() {
    let mut ctx = TestContext::new().load_program(&[jeq(0, 0, 0), jeq(0, 1, 0), j(2)]);
    ctx.set_reg(1, 1);
    let _ = ctx.run();
    assert_eq!(ctx.cpu().stats.branches_taken, 1);
    assert_eq!(ctx.cpu().stats.inst_control, 3);
}
