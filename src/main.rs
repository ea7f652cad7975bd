// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for opgen.

fn main() {
    if let Err(err) = opgen::generator::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
