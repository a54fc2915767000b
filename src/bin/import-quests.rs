// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! `import-quests`: runs `quest2gh` with the same arguments.
//!
//! The primary executable is looked up next to this one first, then on
//! `PATH`. Its exit status is passed through unchanged.

use snafu::prelude::*;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

const PRIMARY: &str = "quest2gh";

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("could not locate the quest2gh executable"))]
    NotFound,

    #[snafu(display("could not run {}: {source}", path.display()))]
    Spawn { path: PathBuf, source: io::Error },
}

fn locate_primary() -> Option<PathBuf> {
    let file_name = format!("{PRIMARY}{}", env::consts::EXE_SUFFIX);

    let sibling = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|path| path.is_file());

    sibling.or_else(|| {
        let paths = env::var_os("PATH")?;
        env::split_paths(&paths)
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    })
}

fn run() -> Result<ExitCode, Error> {
    let primary = locate_primary().context(NotFoundSnafu)?;

    let status = Command::new(&primary)
        .args(env::args_os().skip(1))
        .status()
        .context(SpawnSnafu { path: &primary })?;

    // Killed by a signal: no code to forward
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
