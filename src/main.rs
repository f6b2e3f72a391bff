// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `minlang` command-line driver: reads a script path, runs it through
//! an [`Interpreter`], and reports any error to stderr (spec §6.2).

use std::env::args;
use std::fs;
use std::process::ExitCode;

use colored::Colorize;
use minlang::Interpreter;

fn main() -> ExitCode {
    let mut argv = args();
    argv.next();

    let Some(path) = argv.next() else {
        eprintln!("{}", "error: usage: minlang <script>".red());
        return ExitCode::from(0);
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", format!("error: {}: {}", path, e).red());
            return ExitCode::from(0);
        }
    };

    let mut interpreter = Interpreter::new();
    match interpreter.execute_named(&source, &path) {
        // Exit code parity preserved from the source interpreter: 1 on a
        // successful run, 0 when the script raised an error — the inverse
        // of the usual Unix convention. See DESIGN.md for the record.
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", format!("error: {}", e).red());
            ExitCode::from(0)
        }
    }
}
