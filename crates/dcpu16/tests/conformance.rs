//! Data-table conformance tests: each row packs a starting state, a number
//! of `step` calls, and the expected post-state, the way `mos-6502`/`emu-z80`
//! drive their instruction tables from a bundled JSON fixture rather than
//! one `#[test]` per case.

use std::collections::HashMap;

use dcpu16::{Cpu, RegisterName};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StepVector {
    name: String,
    #[serde(default)]
    registers: HashMap<String, u64>,
    #[serde(default)]
    ram: HashMap<String, u64>,
    steps: u32,
    #[serde(default)]
    expect_registers: HashMap<String, u64>,
    expect_cycle: u64,
    expect_pc: u64,
}

fn register_name(name: &str) -> RegisterName {
    RegisterName::from_name(name).unwrap_or_else(|_| panic!("unknown register name {name:?} in fixture"))
}

#[test]
fn step_vectors_replay_to_their_expected_state() {
    let raw = include_str!("fixtures/step_vectors.json");
    let vectors: Vec<StepVector> = serde_json::from_str(raw).expect("fixture must be valid JSON");
    assert!(!vectors.is_empty(), "fixture must not be empty");

    for vector in vectors {
        let mut cpu = Cpu::new(None, None, None);
        for (name, value) in &vector.registers {
            cpu.regs_mut().set(register_name(name), *value);
        }
        for (addr, value) in &vector.ram {
            let addr: usize = addr.parse().expect("ram key must be a numeric address");
            cpu.ram_mut().set(addr, *value).unwrap();
        }

        for _ in 0..vector.steps {
            cpu.step()
                .unwrap_or_else(|e| panic!("{}: step failed: {e}", vector.name));
        }

        for (name, expected) in &vector.expect_registers {
            let actual = cpu.regs().get(register_name(name));
            assert_eq!(
                actual, *expected,
                "{}: register {name} expected {expected}, got {actual}",
                vector.name
            );
        }
        assert_eq!(
            cpu.cycle(),
            vector.expect_cycle,
            "{}: cycle count mismatch",
            vector.name
        );
        assert_eq!(
            cpu.regs().get(RegisterName::Pc),
            vector.expect_pc,
            "{}: PC mismatch",
            vector.name
        );
    }
}
