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

//! Adjacency-list graph store with per-vertex scratch state.
//!
//! Vertices are dense integer ids in `[0, N)`. A vertex carries an `active` flag (soft delete),
//! the last BFS `dist` written to it, the enumerator's `blocked` flag, and an insertion-ordered
//! witness set `B` used by the unblock cascade (see [`crate::circuit`]).

use indexmap::IndexSet;

use crate::remap::RemapTable;

/// Per-vertex state. `adj` preserves the insertion order of the first occurrence of each edge;
/// this order is the tie-break that makes enumeration output deterministic.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Whether this vertex still participates in the current subgraph.
    pub active: bool,
    /// Distance written by the last [`crate::reach::bfs`] call; `-1` means unreached.
    pub dist: i64,
    /// Enumerator state: true while this vertex is on the current DFS path.
    pub blocked: bool,
    /// Unblock witnesses: vertices to reconsider once this vertex is unblocked.
    pub witnesses: IndexSet<usize>,
    /// Outgoing neighbors, no duplicates.
    pub adj: Vec<usize>,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            active: true,
            dist: -1,
            blocked: false,
            witnesses: IndexSet::new(),
            adj: Vec::new(),
        }
    }
}

/// An adjacency-list directed graph over vertex ids `[0, len())`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Create a graph with `n` active, edge-less vertices.
    pub fn with_capacity(n: usize) -> Self {
        Graph {
            vertices: (0..n).map(|_| Vertex::default()).collect(),
        }
    }

    /// Number of vertices (including inactive ones).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add the edge `u -> v`, idempotently: a duplicate edge is silently ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let adj = &mut self.vertices[u].adj;
        if !adj.contains(&v) {
            adj.push(v);
        }
    }

    /// Outgoing neighbors of `u`, in insertion order.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.vertices[u].adj
    }

    /// Mark `u` as no longer participating in the graph; clears its adjacency.
    pub fn deactivate(&mut self, u: usize) {
        self.vertices[u].active = false;
        self.vertices[u].adj.clear();
    }

    /// Whether `u` is currently active.
    pub fn is_active(&self, u: usize) -> bool {
        self.vertices[u].active
    }

    /// Overwrite the `dist` field of `u`.
    pub fn set_dist(&mut self, u: usize, dist: i64) {
        self.vertices[u].dist = dist;
    }

    /// Read the `dist` field of `u`.
    pub fn get_dist(&self, u: usize) -> i64 {
        self.vertices[u].dist
    }

    /// Shared access to a vertex's full state.
    pub fn vertex(&self, u: usize) -> &Vertex {
        &self.vertices[u]
    }

    /// Mutable access to a vertex's full state.
    pub fn vertex_mut(&mut self, u: usize) -> &mut Vertex {
        &mut self.vertices[u]
    }

    /// Iterate over the ids of all currently active vertices, in ascending order.
    pub fn active_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&i| self.vertices[i].active)
    }

    /// Destroy every vertex for which `should_destroy` returns true, given its index and state.
    /// Already-inactive vertices are treated as destroyed regardless of what the predicate says
    /// about them. Surviving vertices lose any edge that pointed at a destroyed vertex.
    pub fn prune(&mut self, should_destroy: impl Fn(usize, &Vertex) -> bool) {
        let n = self.vertices.len();
        let destroy: Vec<bool> = (0..n)
            .map(|i| !self.vertices[i].active || should_destroy(i, &self.vertices[i]))
            .collect();
        for i in 0..n {
            if destroy[i] {
                self.vertices[i].active = false;
                self.vertices[i].adj.clear();
            } else {
                self.vertices[i].adj.retain(|&t| !destroy[t]);
            }
        }
    }

    /// Rebuild the graph into a dense `[0, N')` index space containing exactly the active
    /// vertices, preserving their relative order and adjacency. Returns the remap table needed
    /// to translate between the old and new namespaces.
    pub fn compact(&self) -> (Graph, RemapTable) {
        let n_old = self.vertices.len();
        let mut old2new: Vec<Option<usize>> = vec![None; n_old];
        let mut new2old: Vec<usize> = Vec::new();
        for old in 0..n_old {
            if self.vertices[old].active {
                old2new[old] = Some(new2old.len());
                new2old.push(old);
            }
        }

        let vertices = new2old
            .iter()
            .map(|&old| {
                let v = &self.vertices[old];
                let adj = v.adj.iter().filter_map(|&t| old2new[t]).collect();
                Vertex {
                    active: true,
                    dist: -1,
                    blocked: false,
                    witnesses: IndexSet::new(),
                    adj,
                }
            })
            .collect();

        (Graph { vertices }, RemapTable::new(old2new, new2old))
    }

    /// Build the transpose: a graph over the same vertex ids with every edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut t = Graph::with_capacity(self.vertices.len());
        for u in self.active_vertices() {
            for &v in &self.vertices[u].adj {
                t.add_edge(v, u);
            }
        }
        t
    }
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = Graph::with_capacity(2);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.neighbors(0), &[1]);
    }

    #[test]
    fn add_edge_preserves_insertion_order() {
        let mut g = Graph::with_capacity(3);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        assert_eq!(g.neighbors(0), &[2, 1]);
    }

    #[test]
    fn deactivate_clears_adjacency() {
        let mut g = Graph::with_capacity(2);
        g.add_edge(0, 1);
        g.deactivate(0);
        assert!(!g.is_active(0));
        assert!(g.neighbors(0).is_empty());
    }

    #[test]
    fn prune_clears_destroyed_and_dangling_edges() {
        let mut g = Graph::with_capacity(3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        g.prune(|i, _| i == 2);
        assert!(!g.is_active(2));
        assert_eq!(g.neighbors(0), &[1]);
        assert!(g.neighbors(1).is_empty());
    }

    #[test]
    fn compact_produces_dense_ids_and_round_trips() {
        let mut g = Graph::with_capacity(4);
        g.add_edge(0, 2);
        g.add_edge(2, 3);
        g.deactivate(1);
        let (compacted, remap) = g.compact();
        assert_eq!(compacted.len(), 3);
        for old in [0usize, 2, 3] {
            let new = remap.old_to_new(old).unwrap();
            assert_eq!(remap.new_to_old(new), old);
        }
        assert!(remap.old_to_new(1).is_none());
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let mut g = Graph::with_capacity(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        let t = g.transpose();
        assert_eq!(t.neighbors(1), &[0]);
        assert_eq!(t.neighbors(2), &[1]);
        assert!(t.neighbors(0).is_empty());
    }
}
