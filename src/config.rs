// cycletrace: bounded, source-rooted simple-cycle enumeration
// Copyright (C) 2026 The cycletrace Contributors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! CLI surface and the merged configuration it produces.

use std::path::PathBuf;

use clap::Parser;

/// Enumerate all simple directed cycles of bounded length through a source vertex.
#[derive(Debug, Parser)]
#[command(name = "cycletrace", version)]
pub struct Cli {
    /// Input file path.
    #[arg(short = 'f', long = "file", default_value = "input.txt")]
    pub file: PathBuf,
    /// Output file path.
    #[arg(short = 'o', long = "output", default_value = "output.txt")]
    pub output: PathBuf,
    /// Override the source vertex from the header.
    #[arg(short = 's')]
    pub source: Option<i64>,
    /// Override the cycle-length bound from the header.
    #[arg(short = 'k')]
    pub max_len: Option<i64>,
    /// Informational logging.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
    /// Debug logging. Takes precedence over `-v` if both are given.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// The effective log filter implied by `-v`/`-d`, or `None` to defer entirely to `RUST_LOG`.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.debug {
            Some(log::LevelFilter::Debug)
        } else if self.verbose {
            Some(log::LevelFilter::Info)
        } else {
            None
        }
    }
}

/// The fully-resolved configuration for one driver invocation: CLI overrides merged with
/// whatever the input header supplied. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path.
    pub input_path: PathBuf,
    /// Output file path.
    pub output_path: PathBuf,
    /// Source-vertex override from `-s`, if given.
    pub source_override: Option<i64>,
    /// Cycle-length-bound override from `-k`, if given.
    pub max_len_override: Option<i64>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            input_path: cli.file.clone(),
            output_path: cli.output.clone(),
            source_override: cli.source,
            max_len_override: cli.max_len,
        }
    }
}
