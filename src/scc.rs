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

//! Optional strongly-connected-components filter, rooted at the source vertex.
//!
//! Redundant with the two-pass reachability pruner for correctness; it only tightens the
//! working set before enumeration. Delegates the SCC computation itself to `petgraph` rather
//! than hand-rolling Tarjan's index/lowlink bookkeeping.

use std::collections::HashSet;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::Graph;

/// Destroy every active vertex that is not in the same strongly-connected component as
/// `source`. A no-op if `source` is already inactive.
pub fn filter_to_source_scc(graph: &mut Graph, source: usize) {
    if !graph.is_active(source) {
        debug!("scc filter: source {source} is inactive, skipping");
        return;
    }

    let pg = to_petgraph(graph);
    let sccs = petgraph::algo::tarjan_scc(&pg);
    let source_scc: HashSet<usize> = sccs
        .into_iter()
        .find(|scc| scc.contains(&NodeIndex::new(source)))
        .into_iter()
        .flatten()
        .map(|n| n.index())
        .collect();

    debug!(
        "scc filter: source's component has {} of {} active vertices",
        source_scc.len(),
        graph.active_vertices().count()
    );

    graph.prune(|i, _| !source_scc.contains(&i));
}

/// Build a plain `petgraph` digraph over the same vertex ids, carrying only active edges.
/// Node indices match vertex ids directly (inactive vertices become isolated nodes).
fn to_petgraph(graph: &Graph) -> DiGraph<(), (), u32> {
    let mut pg = DiGraph::with_capacity(graph.len(), 0);
    for _ in 0..graph.len() {
        pg.add_node(());
    }
    for u in graph.active_vertices() {
        for &v in graph.neighbors(u) {
            pg.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
    }
    pg
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_sources_strongly_connected_component() {
        // 0 <-> 1 <-> 2 is one SCC containing the source (0); 3 -> 4 is a disjoint chain
        // reachable from 2 but not co-reachable, so it must be destroyed.
        let mut g = Graph::with_capacity(5);
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        g.add_edge(2, 3);
        g.add_edge(3, 4);

        filter_to_source_scc(&mut g, 0);

        assert!(g.is_active(0));
        assert!(g.is_active(1));
        assert!(g.is_active(2));
        assert!(!g.is_active(3));
        assert!(!g.is_active(4));
    }

    #[test]
    fn isolated_source_keeps_only_itself() {
        let mut g = Graph::with_capacity(3);
        g.add_edge(1, 2);
        g.add_edge(2, 1);

        filter_to_source_scc(&mut g, 0);

        assert!(g.is_active(0));
        assert!(!g.is_active(1));
        assert!(!g.is_active(2));
    }

    #[test]
    fn inactive_source_is_a_no_op() {
        let mut g = Graph::with_capacity(2);
        g.add_edge(0, 1);
        g.deactivate(0);
        filter_to_source_scc(&mut g, 0);
        assert!(g.is_active(1));
    }
}
