//! Simulator Run Loop Tests.

use e20sim_core::Simulator;
use e20sim_core::common::RegIdx;
use e20sim_core::config::{CacheHierarchyConfig, Config, GeneralConfig};
use e20sim_core::core::arch::Memory;
use e20sim_core::sim::RunOutcome;
use e20sim_core::sim::loader::load_program;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;

fn config(cache: &str, max_steps: Option<u64>) -> Config {
    Config {
        general: GeneralConfig {
            max_steps,
            ..GeneralConfig::default()
        },
        cache: if cache.is_empty() {
            CacheHierarchyConfig::default()
        } else {
            cache.parse().expect("valid cache")
        },
    }
}

#[test]
fn runs_listing_to_halt() {
    let words = [addi(1, 0, 5), addi(2, 0, 3), add(3, 1, 2), j(3)];
    let mem = load_program(listing(&words).as_bytes()).expect("valid");
    let mut sim = Simulator::new(mem, &Config::default());

    let mut log: Vec<u8> = Vec::new();
    let outcome = sim.run(&mut log).expect("run");

    assert_eq!(outcome, RunOutcome::Halted { steps: 4 });
    assert!(log.is_empty());
    assert!(sim.caches.is_none());
    assert_eq!(sim.cpu.regs.iter().collect::<Vec<_>>(), vec![0, 5, 3, 8, 0, 0, 0, 0]);
    assert_eq!(sim.cpu.pc.val(), 3);
}

#[test]
fn step_limit_stops_infinite_loops() {
    let mem = Memory::from_words(&[addi(1, 1, 1), j(0)]);
    let mut sim = Simulator::new(mem, &config("", Some(101)));

    let outcome = sim.run(&mut std::io::sink()).expect("run");

    assert_eq!(outcome, RunOutcome::StepLimit { steps: 101 });
    assert!(!sim.cpu.is_halted());
    assert_eq!(sim.cpu.regs.read(RegIdx::new(1)), 51);
}

#[test]
fn halted_machine_does_not_run_again() {
    let mut sim = Simulator::new(Memory::from_words(&[j(0)]), &Config::default());
    let _ = sim.run(&mut std::io::sink()).expect("run");
    let outcome = sim.run(&mut std::io::sink()).expect("run");
    assert_eq!(outcome, RunOutcome::Halted { steps: 0 });
    assert_eq!(sim.cpu.stats.instructions_retired, 1);
}

#[test]
fn cache_log_is_written_in_execution_order() {
    let mem = Memory::from_words(&[sw(0, 10, 0), lw(1, 10, 0), lw(1, 11, 0), j(3)]);
    let mut sim = Simulator::new(mem, &config("8,2,2", None));

    let mut log: Vec<u8> = Vec::new();
    let _ = sim.run(&mut log).expect("run");

    let text = String::from_utf8(log).expect("ascii");
    assert_eq!(
        text,
        "L1 SW    pc:    0\taddr:   10\trow:   1\n\
         L1 HIT   pc:    1\taddr:   10\trow:   1\n\
         L1 HIT   pc:    2\taddr:   11\trow:   1\n"
    );
    assert_eq!(sim.cpu.stats.l1.hits, 2);
    assert_eq!(sim.cpu.stats.l1.stores, 1);
    assert_eq!(sim.cpu.stats.l2.stores, 0);
}

#[test]
fn caches_do_not_change_architectural_results() {
    let program = [
        addi(1, 0, 40),
        sw(1, 0, 1),
        lw(2, 0, 1),
        addi(1, 1, 1),
        slti(3, 1, 50),
        jeq(3, 0, 1),
        j(1),
        j(7),
    ];
    let mut plain = Simulator::new(Memory::from_words(&program), &Config::default());
    let mut cached = Simulator::new(Memory::from_words(&program), &config("4,1,1,16,2,2", None));

    let _ = plain.run(&mut std::io::sink()).expect("run");
    let _ = cached.run(&mut std::io::sink()).expect("run");

    assert_eq!(plain.cpu.regs, cached.cpu.regs);
    assert_eq!(plain.cpu.pc, cached.cpu.pc);
    assert!(plain.cpu.mem == cached.cpu.mem);
}
