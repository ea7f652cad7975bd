// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Text templates for the three generated artifacts.
//!
//! Each generator is a pure function from a record sequence to text; all
//! file and stream writing lives in the run driver.

use crate::instructions::InstructionRecord;

/// Header of every generated test file.
pub const TEST_FILE_HEADER: &str = "mod common;\n\n";

/// Skeleton test cases for `records`, one per opcode variant.
///
/// Test names combine the opcode byte, addressing mode, and mnemonic, so
/// they stay unique as long as opcode bytes are. Each body sets up a CPU
/// with RAM attached over the full address range and a failing placeholder
/// assertion to be replaced with real behavioral checks.
pub fn test_stubs(records: &[InstructionRecord]) -> String {
    let stubs: Vec<String> = records.iter().map(test_stub).collect();
    format!("{TEST_FILE_HEADER}{}", stubs.join("\n").trim_end())
}

fn test_stub(record: &InstructionRecord) -> String {
    format!(
        concat!(
            "#[test]\n",
            "fn opcode_0x{code:02x}_{mode}_{name}() {{\n",
            "    let mut _cpu = common::init_cpu();\n",
            "    assert_eq!(2 + 2, 5);\n",
            "}}\n"
        ),
        code = record.code,
        mode = record.mode.name().to_ascii_lowercase(),
        name = record.name.to_ascii_lowercase()
    )
}

/// Opcode-descriptor lines for `records`, one per record in input order,
/// ready to paste into the opcode table. The tick modifier is left at
/// `TickModifier::None` for the maintainer to adjust.
pub fn table_entries(records: &[InstructionRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "(0x{code:02X}, Opcode::new(0x{code:02X}, {size}, {tick}, \"{name}\", AddressingMode::{mode}, TickModifier::None)),",
                code = record.code,
                size = record.size,
                tick = record.tick,
                name = record.name,
                mode = record.mode
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The dispatch match arm routing `records`' opcode bytes to the mnemonic's
/// handler.
pub fn dispatch_arm(records: &[InstructionRecord], mnemonic: &str) -> String {
    let codes: Vec<String> = records
        .iter()
        .map(|record| format!("0x{:02X}", record.code))
        .collect();
    format!(
        "{} => self.{}(&opcode.mode)",
        codes.join(" | "),
        mnemonic.to_ascii_lowercase()
    )
}
