// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::generator::error::{GenError, GenErrorKind};

pub const VERSION: &str = "1.0";

const LONG_ABOUT: &str = "Opcode scaffolding generator for the 6502 emulator core.

For the requested mnemonic, writes a skeleton test file to
tests/test_opcode_<mnemonic>.rs and prints opcode table entries and a
dispatch match arm to standard output, ready to be pasted into the opcode
table and the CPU step loop.";

#[derive(Parser, Debug)]
#[command(
    name = "opgen",
    version = VERSION,
    about = "Opcode test and dispatch scaffolding generator",
    long_about = LONG_ABOUT,
    allow_missing_positional = true
)]
pub struct Cli {
    /// Instruction table file (defaults to <root>/scripts/instructions.json).
    #[arg(value_name = "TABLE")]
    pub table: Option<PathBuf>,
    /// Mnemonic to generate scaffolding for (matched case-insensitively).
    #[arg(value_name = "MNEMONIC")]
    pub mnemonic: String,
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        long_help = "Emulator project root. The default table path and the tests output directory are resolved relative to it."
    )]
    pub root: PathBuf,
    #[arg(
        long = "allow-empty",
        action = ArgAction::SetTrue,
        long_help = "Proceed when the mnemonic matches no table entry, generating empty scaffolding instead of failing."
    )]
    pub allow_empty: bool,
}

/// Validated run configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub table_path: PathBuf,
    pub tests_dir: PathBuf,
    pub mnemonic: String,
    pub allow_empty: bool,
}

pub fn validate_cli(cli: &Cli) -> Result<GenConfig, GenError> {
    let mnemonic = cli.mnemonic.trim();
    if mnemonic.is_empty() || !mnemonic.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(GenError::new(
            GenErrorKind::Cli,
            "Mnemonic must be alphanumeric",
            Some(&cli.mnemonic),
        ));
    }

    let table_path = match &cli.table {
        Some(path) => path.clone(),
        None => cli.root.join("scripts").join("instructions.json"),
    };

    Ok(GenConfig {
        table_path,
        tests_dir: cli.root.join("tests"),
        mnemonic: mnemonic.to_string(),
        allow_empty: cli.allow_empty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn single_positional_is_the_mnemonic() {
        let cli = Cli::try_parse_from(["opgen", "LDA"]).unwrap();
        assert!(cli.table.is_none());
        assert_eq!(cli.mnemonic, "LDA");
        assert!(!cli.allow_empty);
    }

    #[test]
    fn two_positionals_are_table_then_mnemonic() {
        let cli = Cli::try_parse_from(["opgen", "custom.json", "LDA"]).unwrap();
        assert_eq!(cli.table.as_deref(), Some(Path::new("custom.json")));
        assert_eq!(cli.mnemonic, "LDA");
    }

    #[test]
    fn missing_mnemonic_is_a_usage_error() {
        assert!(Cli::try_parse_from(["opgen"]).is_err());
    }

    #[test]
    fn default_paths_resolve_under_root() {
        let cli = Cli::try_parse_from(["opgen", "--root", "emu", "LDA"]).unwrap();
        let config = validate_cli(&cli).unwrap();
        assert_eq!(
            config.table_path,
            Path::new("emu").join("scripts").join("instructions.json")
        );
        assert_eq!(config.tests_dir, Path::new("emu").join("tests"));
        assert_eq!(config.mnemonic, "LDA");
    }

    #[test]
    fn explicit_table_overrides_the_default() {
        let cli = Cli::try_parse_from(["opgen", "other.json", "LDA"]).unwrap();
        let config = validate_cli(&cli).unwrap();
        assert_eq!(config.table_path, Path::new("other.json"));
    }

    #[test]
    fn mnemonic_must_be_alphanumeric() {
        let cli = Cli::try_parse_from(["opgen", "LD/A"]).unwrap();
        let err = validate_cli(&cli).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Cli);
    }
}
