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

//! # cycletrace
//!
//! Enumerates every simple directed cycle of bounded length that passes through a chosen source
//! vertex in a directed graph.
//!
//! ## Structure
//! - [`graph`] holds the adjacency-list store with its per-vertex scratch fields.
//! - [`reach`] computes truncated BFS distances from a source.
//! - [`prune`] holds the two distance predicates the driver applies between BFS passes.
//! - [`remap`] tracks the old-id/new-id bijections a prune-and-compact pass produces.
//! - [`scc`] optionally tightens the working set to the source's strongly-connected component.
//! - [`circuit`] is the depth-limited cycle enumerator itself.
//! - [`sink`] writes each emitted cycle.
//! - [`driver`] composes all of the above into one entry point, [`driver::run`].
//! - [`input`] parses the input file format; [`config`] holds the CLI surface and merged config;
//!   [`error`] holds every fallible boundary's error type.

#![deny(
    missing_docs,
    clippy::missing_docs_in_private_items,
    missing_debug_implementations,
    rust_2018_idioms
)]

pub mod circuit;
pub mod config;
pub mod driver;
pub mod error;
pub mod graph;
pub mod input;
pub mod prune;
pub mod reach;
pub mod remap;
pub mod scc;
pub mod sink;
