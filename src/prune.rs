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

//! Distance predicates used by the two pruning passes.
//!
//! Every emitted cycle has at most `max_vertices = k + 1` distinct vertices (see
//! [`crate::circuit`] and property 1 of the testable properties). A vertex sitting at position
//! `j` on such a cycle satisfies `dist_forward(v) <= j` and `dist_backward(v) <= max_vertices -
//! j`, so `dist_forward(v) <= max_vertices - 1` and `dist_forward(v) + dist_backward(v) <=
//! max_vertices`. These two facts are exactly the two prune predicates below; they are safe
//! (never destroy a vertex that could legally appear on some emitted cycle) but not perfectly
//! tight, which is fine since pruning is an optimization, not a source of truth.

use crate::graph::Vertex;

/// Forward-horizon predicate for the first pruning pass: destroy unreached vertices, and
/// vertices farther from the source than a cycle of `max_vertices` vertices could ever reach.
pub fn forward_horizon(max_vertices: usize) -> impl Fn(usize, &Vertex) -> bool {
    move |_, v| v.dist == -1 || v.dist as usize > max_vertices - 1
}

/// Round-trip-horizon predicate for the second pruning pass: destroy vertices unreached in
/// either direction, or whose forward-plus-backward distance exceeds what a cycle of
/// `max_vertices` vertices could accommodate.
pub fn round_trip_horizon(
    backward: &crate::graph::Graph,
    max_vertices: usize,
) -> impl Fn(usize, &Vertex) -> bool + '_ {
    move |i, v| {
        let fwd = v.dist;
        let bwd = backward.get_dist(i);
        fwd == -1 || bwd == -1 || (fwd + bwd) as usize > max_vertices
    }
}
