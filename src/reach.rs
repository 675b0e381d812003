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

//! Breadth-first reachability scanning, truncated at a horizon.

use std::collections::VecDeque;

use log::debug;

use crate::graph::Graph;

/// Reset every vertex's `dist` to `-1`, then compute `dist[source] = 0` and breadth-first
/// distances for every active vertex reachable from `source`, never expanding past a vertex
/// whose distance has reached `horizon - 1` (so no vertex is ever assigned a distance greater
/// than `horizon - 1`).
///
/// A no-op, leaving every `dist` at `-1`, if `source` is inactive.
pub fn bfs(graph: &mut Graph, source: usize, horizon: usize) {
    if !graph.is_active(source) {
        debug!("bfs: source {source} is inactive, skipping");
        return;
    }
    for v in 0..graph.len() {
        graph.set_dist(v, -1);
    }

    graph.set_dist(source, 0);
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(cur) = queue.pop_front() {
        let cur_dist = graph.get_dist(cur);
        // Do not expand past a vertex already at the horizon's last reachable distance.
        if cur_dist as usize + 1 >= horizon {
            continue;
        }
        let neighbors: Vec<usize> = graph.neighbors(cur).to_vec();
        for next in neighbors {
            if graph.is_active(next) && graph.get_dist(next) == -1 {
                graph.set_dist(next, cur_dist + 1);
                queue.push_back(next);
            }
        }
    }
    debug!("bfs from {source} (horizon {horizon}) complete");
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;

    fn chain(n: usize) -> Graph {
        let mut g = Graph::with_capacity(n);
        for i in 0..n.saturating_sub(1) {
            g.add_edge(i, i + 1);
        }
        g
    }

    #[test]
    fn distances_match_hop_count_within_horizon() {
        let mut g = chain(5);
        bfs(&mut g, 0, 10);
        for i in 0..5 {
            assert_eq!(g.get_dist(i), i as i64);
        }
    }

    #[test]
    fn truncation_matches_unbounded_set_up_to_horizon_minus_one() {
        // Property 8: the set {v : dist(v) <= horizon-1} is the same whether BFS is truncated
        // at horizon-1 or left unbounded.
        let mut truncated = chain(8);
        bfs(&mut truncated, 0, 4);
        let mut unbounded = chain(8);
        bfs(&mut unbounded, 0, usize::MAX);

        let within = |g: &Graph, bound: i64| -> Vec<usize> {
            (0..g.len())
                .filter(|&v| g.get_dist(v) != -1 && g.get_dist(v) <= bound)
                .collect()
        };
        assert_eq!(within(&truncated, 3), within(&unbounded, 3));
    }

    #[test]
    fn vertices_beyond_horizon_are_unreached() {
        let mut g = chain(6);
        bfs(&mut g, 0, 3);
        assert_eq!(g.get_dist(0), 0);
        assert_eq!(g.get_dist(1), 1);
        assert_eq!(g.get_dist(2), 2);
        assert_eq!(g.get_dist(3), -1);
        assert_eq!(g.get_dist(4), -1);
    }

    #[test]
    fn inactive_source_leaves_distances_untouched() {
        let mut g = chain(3);
        g.deactivate(0);
        bfs(&mut g, 0, 5);
        for i in 0..3 {
            assert_eq!(g.get_dist(i), -1);
        }
    }

    #[test]
    fn ignores_inactive_vertices_along_the_way() {
        let mut g = chain(4);
        g.deactivate(2);
        // deactivate clears vertex 2's own adjacency, but vertex 1 still points at it.
        bfs(&mut g, 0, 10);
        assert_eq!(g.get_dist(1), 1);
        assert_eq!(g.get_dist(2), -1);
        assert_eq!(g.get_dist(3), -1);
    }
}
