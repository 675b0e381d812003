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

//! Error types for every fallible boundary in the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading the input file and writing the output file.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("failed to open input file {path}: {source}")]
    InputOpen {
        /// Path that was passed to `-f`/`--file`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be created.
    #[error("failed to create output file {path}: {source}")]
    OutputOpen {
        /// Path that was passed to `-o`/`--output`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// An I/O error occurred while reading the input file.
    #[error("failed to read input file: {0}")]
    InputRead(#[source] std::io::Error),
    /// An I/O error occurred while writing the output file.
    #[error("failed to write output file: {0}")]
    OutputWrite(#[source] std::io::Error),
    /// The input file is empty; there is no header line to parse.
    #[error("input file has no header line")]
    EmptyInput,
    /// The header line does not have 2 or 4 whitespace-separated integer fields.
    #[error("header line must contain 2 (N M) or 4 (N M S K) integers, found {found}")]
    HeaderFieldCount {
        /// Number of whitespace-separated tokens actually found.
        found: usize,
    },
    /// A token in the header line did not parse as an integer.
    #[error("header token {token:?} is not an integer")]
    HeaderNotInteger {
        /// The offending token.
        token: String,
    },
    /// N was not a positive integer.
    #[error("N must be positive, found {0}")]
    NonPositiveN(i64),
    /// M was not a positive integer.
    #[error("M must be positive, found {0}")]
    NonPositiveM(i64),
    /// K was not a positive integer.
    #[error("K must be positive, found {0}")]
    NonPositiveK(i64),
    /// S was negative.
    #[error("S must not be negative, found {0}")]
    NegativeS(i64),
    /// S was not supplied by the header and no `-s` override was given.
    #[error("source vertex S was not given in the header and no -s override was supplied")]
    MissingSource,
    /// K was not supplied by the header and no `-k` override was given.
    #[error("cycle-length bound K was not given in the header and no -k override was supplied")]
    MissingMaxLen,
    /// S is out of the valid vertex range [0, N).
    #[error("source vertex S={s} is out of range [0, {n})")]
    SourceOutOfRange {
        /// The offending value of S.
        s: i64,
        /// The declared vertex count.
        n: usize,
    },
    /// An edge line did not have exactly 2 whitespace-separated integer fields.
    #[error("edge line {line}: expected 2 integers, found {found}")]
    EdgeFieldCount {
        /// 1-based line number within the edge block.
        line: usize,
        /// Number of tokens actually found.
        found: usize,
    },
    /// A token on an edge line did not parse as an integer.
    #[error("edge line {line}: token {token:?} is not an integer")]
    EdgeNotInteger {
        /// 1-based line number within the edge block.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// An edge line referenced a vertex id outside [0, N).
    #[error("edge line {line}: vertex id {vertex} is out of range [0, {n})")]
    EdgeVertexOutOfRange {
        /// 1-based line number within the edge block.
        line: usize,
        /// The offending vertex id.
        vertex: i64,
        /// The declared vertex count.
        n: usize,
    },
    /// The input file ended before all M edge lines were read.
    #[error("expected {expected} edge lines, found only {found}")]
    TruncatedEdgeList {
        /// Declared edge count M.
        expected: usize,
        /// Edge lines actually present.
        found: usize,
    },
    /// Internal-invariant violation: S was destroyed by a prune pass even though it started active.
    ///
    /// This indicates a bug in the pruning pipeline, not bad input, since the source is always
    /// trivially reachable from (and to) itself.
    #[error("internal error: source vertex was lost during remapping")]
    SourceLostDuringRemap,
}
