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

//! Pipeline composition: parse, prune twice, optionally tighten by SCC, enumerate, write.

use std::fs::File;
use std::io::BufReader;

use log::info;

use crate::circuit;
use crate::config::Config;
use crate::error::Error;
use crate::graph::Graph;
use crate::input;
use crate::prune;
use crate::reach::bfs;
use crate::remap::RemapTable;
use crate::scc;
use crate::sink::Sink;

/// Run the full pipeline for one invocation: parse `config.input_path`, prune the graph down to
/// the vertices that can participate in a bounded cycle through the source, enumerate those
/// cycles, and write them to `config.output_path`. The output file is created (possibly empty)
/// even when the source turns out to have no admissible cycles.
pub fn run(config: &Config) -> Result<(), Error> {
    let input_file = File::open(&config.input_path).map_err(|source| Error::InputOpen {
        path: config.input_path.clone(),
        source,
    })?;
    let parsed = input::parse(BufReader::new(input_file), config)?;
    let mut graph = parsed.graph;
    let source = parsed.source;
    let max_vertices = parsed.max_len + 1;

    let output_file = File::create(&config.output_path).map_err(|source| Error::OutputOpen {
        path: config.output_path.clone(),
        source,
    })?;
    let mut sink = Sink::new(output_file);

    let (cycles, remap) = enumerate_cycles(&mut graph, source, parsed.max_len, max_vertices)?;
    info!("emitting {} cycle(s)", cycles.len());
    for cycle in &cycles {
        sink.write_cycle(cycle, &remap)?;
    }
    sink.flush()?;

    Ok(())
}

/// The prune/remap/enumerate portion of the pipeline, isolated so it can be exercised directly
/// against an in-memory graph without touching the filesystem.
fn enumerate_cycles(
    graph: &mut Graph,
    source: usize,
    max_len: usize,
    max_vertices: usize,
) -> Result<(Vec<Vec<usize>>, RemapTable), Error> {
    // Pass 1: forward horizon from the source in the original namespace.
    bfs(graph, source, max_vertices);
    graph.prune(prune::forward_horizon(max_vertices));
    let (mut g1, remap1) = graph.compact();
    let source1 = remap1
        .old_to_new(source)
        .ok_or(Error::SourceLostDuringRemap)?;

    // Pass 2: round-trip horizon, combining forward distance in g1 with backward distance in
    // g1's transpose. compact() reset g1's own dist field, so the forward BFS is re-run here.
    bfs(&mut g1, source1, max_vertices);
    let mut g1t = g1.transpose();
    bfs(&mut g1t, source1, max_vertices);
    g1.prune(prune::round_trip_horizon(&g1t, max_vertices));
    let (mut g2, remap2) = g1.compact();
    let source2 = remap2
        .old_to_new(source1)
        .ok_or(Error::SourceLostDuringRemap)?;

    // Optional SCC tightening: redundant for correctness, only shrinks the working set. Left
    // unconditionally on, since it never changes the emitted cycle set (see design notes).
    scc::filter_to_source_scc(&mut g2, source2);

    let composed = remap1.compose(&remap2);
    let cycles = circuit::enumerate(&mut g2, source2, max_len);
    Ok((cycles, composed))
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;

    fn run_on(graph: &mut Graph, source: usize, max_len: usize) -> Vec<Vec<usize>> {
        let max_vertices = max_len + 1;
        let (cycles, remap) = enumerate_cycles(graph, source, max_len, max_vertices).unwrap();
        cycles
            .into_iter()
            .map(|c| c.into_iter().map(|v| remap.new_to_old(v)).collect())
            .collect()
    }

    #[test]
    fn e1_triangle() {
        let mut g = Graph::with_capacity(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        assert_eq!(run_on(&mut g, 0, 3), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn e2_two_short_cycles() {
        let mut g = Graph::with_capacity(4);
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        g.add_edge(0, 2);
        g.add_edge(2, 0);
        assert_eq!(run_on(&mut g, 0, 3), vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn e3_cycle_too_long_is_pruned_away_entirely() {
        let mut g = Graph::with_capacity(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        assert!(run_on(&mut g, 0, 2).is_empty());
    }

    #[test]
    fn e4_self_pair() {
        let mut g = Graph::with_capacity(2);
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        assert_eq!(run_on(&mut g, 0, 5), vec![vec![0, 1]]);
    }

    #[test]
    fn e5_cycle_not_through_source_is_excluded_by_scc_filter() {
        let mut g = Graph::with_capacity(5);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g.add_edge(2, 3);
        g.add_edge(3, 4);
        g.add_edge(4, 2);
        assert_eq!(run_on(&mut g, 0, 4), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn e6_adjacency_order_determines_output_order() {
        let mut g = Graph::with_capacity(5);
        g.add_edge(0, 3);
        g.add_edge(3, 0);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        assert_eq!(run_on(&mut g, 0, 5), vec![vec![0, 3], vec![0, 1, 2]]);
    }

    #[test]
    fn source_with_no_admissible_cycle_yields_empty_result() {
        let mut g = Graph::with_capacity(2);
        g.add_edge(0, 1);
        assert!(run_on(&mut g, 0, 5).is_empty());
    }
}
