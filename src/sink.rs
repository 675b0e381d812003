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

//! Cycle output: one line per cycle, original-namespace vertex ids.

use std::fmt;
use std::io::{BufWriter, Write};

use itertools::Itertools;

use crate::error::Error;
use crate::remap::RemapTable;

/// Wraps a `BufWriter` so per-cycle writes do not each incur a syscall.
pub struct Sink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> fmt::Debug for Sink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

impl<W: Write> Sink<W> {
    /// Wrap `writer` for cycle output.
    pub fn new(writer: W) -> Self {
        Sink {
            out: BufWriter::new(writer),
        }
    }

    /// Write one cycle: a new-space vertex sequence, translated through `remap` back to the
    /// original namespace, space-separated, newline-terminated.
    pub fn write_cycle(&mut self, cycle: &[usize], remap: &RemapTable) -> Result<(), Error> {
        let line = cycle.iter().map(|&v| remap.new_to_old(v)).join(" ");
        writeln!(self.out, "{line}").map_err(Error::OutputWrite)?;
        Ok(())
    }

    /// Flush any buffered output. Called unconditionally before the driver returns, including
    /// on the empty-result path, so the output file always exists.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush().map_err(Error::OutputWrite)
    }
}
