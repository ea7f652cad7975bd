// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Opcode scaffolding generator - main entry point.
//!
//! Ties the instruction table loader to the three text generators and the
//! output emitter: the test-stub text goes to a file under the tests
//! directory, the table entries and dispatch arm go to standard output for
//! manual splicing into hand-maintained source files.

pub mod cli;
pub mod error;
pub mod templates;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::instructions::{load_table, select, InstructionRecord};

use cli::{validate_cli, Cli, GenConfig};
use error::{GenError, GenErrorKind};
use templates::{dispatch_arm, table_entries, test_stubs};

pub use cli::VERSION;

/// Report from a successful generator run.
#[derive(Debug)]
pub struct GenReport {
    pub test_file: PathBuf,
    pub stub_count: usize,
}

/// Run the generator with command-line arguments.
pub fn run() -> Result<GenReport, GenError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(GenError::new(GenErrorKind::Cli, &err.to_string(), None)),
    };
    let config = validate_cli(&cli)?;
    let stdout = io::stdout();
    run_one(&config, &mut stdout.lock())
}

/// Run the full pipeline for one configuration, printing the table entries
/// and dispatch arm to `out`.
///
/// By default an empty selection aborts before anything is written;
/// `allow_empty` turns that into a run producing empty scaffolding.
pub fn run_one(config: &GenConfig, out: &mut impl Write) -> Result<GenReport, GenError> {
    let records = load_table(&config.table_path)?;
    let selection = select(&records, &config.mnemonic);
    if selection.is_empty() && !config.allow_empty {
        return Err(GenError::new(
            GenErrorKind::Selection,
            "Mnemonic not found in instruction table",
            Some(&config.mnemonic),
        ));
    }

    let test_file = write_test_file(config, &selection)?;

    writeln!(out, "{}", table_entries(&selection)).map_err(write_error)?;
    writeln!(out).map_err(write_error)?;
    writeln!(out, "{}", dispatch_arm(&selection, &config.mnemonic)).map_err(write_error)?;

    Ok(GenReport {
        test_file,
        stub_count: selection.len(),
    })
}

fn write_test_file(
    config: &GenConfig,
    selection: &[InstructionRecord],
) -> Result<PathBuf, GenError> {
    fs::create_dir_all(&config.tests_dir).map_err(|err| {
        GenError::new(
            GenErrorKind::Io,
            "Error creating tests directory",
            Some(&err.to_string()),
        )
    })?;
    let path = config.tests_dir.join(format!(
        "test_opcode_{}.rs",
        config.mnemonic.to_ascii_lowercase()
    ));
    fs::write(&path, test_stubs(selection)).map_err(|err| {
        GenError::new(
            GenErrorKind::Io,
            "Error writing test file",
            Some(&format!("{}: {err}", path.display())),
        )
    })?;
    Ok(path)
}

fn write_error(err: io::Error) -> GenError {
    GenError::new(GenErrorKind::Io, "Error writing output", Some(&err.to_string()))
}
