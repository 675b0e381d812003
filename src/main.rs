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

use clap::Parser;
use cycletrace::config::{Cli, Config};
use cycletrace::driver;

fn main() {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level() {
        let directive = format!("cycletrace={level}");
        let filter = match std::env::var("RUST_LOG") {
            Ok(existing) if !existing.is_empty() => format!("{existing},{directive}"),
            _ => directive,
        };
        std::env::set_var("RUST_LOG", filter);
    }
    pretty_env_logger::init_timed();

    let config = Config::from(&cli);
    if let Err(err) = driver::run(&config) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
