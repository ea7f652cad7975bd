// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction table loading and mnemonic selection.
//!
//! The table is the emulator project's `scripts/instructions.json`: an
//! ordered array of records, one per opcode byte. Loading trusts the table
//! apart from two checks: every mode must name an addressing mode the decoder
//! recognizes, and opcode bytes must be unique across the table.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::generator::error::{GenError, GenErrorKind};

/// Operand addressing strategies recognized by the emulator's decoder.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Immediate,
    Relative,
    Accumulator,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    /// Variant name as spelled in the decoder's enum.
    pub fn name(&self) -> &'static str {
        match self {
            AddressingMode::Implied => "Implied",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::Relative => "Relative",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::ZeroPage => "ZeroPage",
            AddressingMode::ZeroPageX => "ZeroPageX",
            AddressingMode::ZeroPageY => "ZeroPageY",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "AbsoluteX",
            AddressingMode::AbsoluteY => "AbsoluteY",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::IndirectX => "IndirectX",
            AddressingMode::IndirectY => "IndirectY",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the instruction table.
#[derive(Deserialize, Debug, Clone)]
pub struct InstructionRecord {
    /// Opcode byte, encoded in the table as two hex digits.
    #[serde(deserialize_with = "hex_byte")]
    pub code: u8,
    /// Instruction length in bytes.
    pub size: u8,
    /// Base cycle count.
    pub tick: u8,
    /// Mnemonic shared by all addressing-mode variants of one operation.
    pub name: String,
    pub mode: AddressingMode,
}

fn is_valid_hex_2(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn hex_byte<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if !is_valid_hex_2(&text) {
        return Err(serde::de::Error::custom(format!(
            "opcode byte must be two hex digits, got '{text}'"
        )));
    }
    u8::from_str_radix(&text, 16).map_err(serde::de::Error::custom)
}

/// Load the instruction table from `path`.
///
/// An unreadable file, a malformed record, or a duplicate opcode byte is
/// fatal; there is no partial result.
pub fn load_table(path: &Path) -> Result<Vec<InstructionRecord>, GenError> {
    let text = fs::read_to_string(path).map_err(|err| {
        GenError::new(
            GenErrorKind::Io,
            "Error reading instruction table",
            Some(&format!("{}: {err}", path.display())),
        )
    })?;
    let records: Vec<InstructionRecord> = serde_json::from_str(&text).map_err(|err| {
        GenError::new(
            GenErrorKind::Parse,
            "Invalid instruction table",
            Some(&err.to_string()),
        )
    })?;
    check_unique_codes(&records)?;
    Ok(records)
}

fn check_unique_codes(records: &[InstructionRecord]) -> Result<(), GenError> {
    let mut seen = [false; 256];
    for record in records {
        if seen[record.code as usize] {
            return Err(GenError::new(
                GenErrorKind::Table,
                "Duplicate opcode byte in instruction table",
                Some(&format!("0x{:02X}", record.code)),
            ));
        }
        seen[record.code as usize] = true;
    }
    Ok(())
}

/// Records whose mnemonic matches `mnemonic` case-insensitively, in table
/// order.
pub fn select(records: &[InstructionRecord], mnemonic: &str) -> Vec<InstructionRecord> {
    let upper = mnemonic.to_ascii_uppercase();
    records
        .iter()
        .filter(|record| record.name.to_ascii_uppercase() == upper)
        .cloned()
        .collect()
}
