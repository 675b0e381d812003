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

//! Input-file parsing: the header line and the `M` edge lines that follow it.

use std::io::{BufRead, BufReader, Read};

use log::info;

use crate::config::Config;
use crate::error::Error;
use crate::graph::Graph;

/// The parsed, validated contents of an input file: a graph, its declared source, and its
/// cycle-length bound.
#[derive(Debug)]
pub struct ParsedInput {
    /// The graph built from the header's `N` and the `M` edge lines.
    pub graph: Graph,
    /// The source vertex, either from the header or from `-s`.
    pub source: usize,
    /// The cycle-length bound, either from the header or from `-k`.
    pub max_len: usize,
}

/// Read and validate an input file against `config`, merging header-supplied `S`/`K` with CLI
/// overrides (CLI wins when both are present).
pub fn parse(reader: impl Read, config: &Config) -> Result<ParsedInput, Error> {
    let mut lines = BufReader::new(reader).lines();

    let header = lines.next().ok_or(Error::EmptyInput)?.map_err(Error::InputRead)?;
    let header_tokens: Vec<&str> = header.split_whitespace().collect();

    let (n, m, header_s, header_k) = match header_tokens.len() {
        4 => {
            let n = parse_int(header_tokens[0])?;
            let m = parse_int(header_tokens[1])?;
            let s = parse_int(header_tokens[2])?;
            let k = parse_int(header_tokens[3])?;
            (n, m, Some(s), Some(k))
        }
        2 => {
            let n = parse_int(header_tokens[0])?;
            let m = parse_int(header_tokens[1])?;
            (n, m, None, None)
        }
        found => return Err(Error::HeaderFieldCount { found }),
    };

    if n <= 0 {
        return Err(Error::NonPositiveN(n));
    }
    if m <= 0 {
        return Err(Error::NonPositiveM(m));
    }

    let source = match config.source_override.or(header_s) {
        Some(s) => s,
        None => return Err(Error::MissingSource),
    };
    let max_len = match config.max_len_override.or(header_k) {
        Some(k) => k,
        None => return Err(Error::MissingMaxLen),
    };

    if source < 0 {
        return Err(Error::NegativeS(source));
    }
    if max_len <= 0 {
        return Err(Error::NonPositiveK(max_len));
    }
    let n = n as usize;
    if source as usize >= n {
        return Err(Error::SourceOutOfRange { s: source, n });
    }

    let mut graph = Graph::with_capacity(n);
    let m = m as usize;
    let mut read = 0usize;
    for (line_no, line) in lines.enumerate() {
        if read == m {
            break;
        }
        let line = line.map_err(Error::InputRead)?;
        // Blank lines between edges are not part of the format, but skipping them costs
        // nothing and is friendlier than a hard parse failure on a trailing newline.
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(Error::EdgeFieldCount {
                line: line_no + 1,
                found: tokens.len(),
            });
        }
        let u = parse_edge_int(tokens[0], line_no + 1)?;
        let v = parse_edge_int(tokens[1], line_no + 1)?;
        for vertex in [u, v] {
            if vertex < 0 || vertex as usize >= n {
                return Err(Error::EdgeVertexOutOfRange {
                    line: line_no + 1,
                    vertex,
                    n,
                });
            }
        }
        graph.add_edge(u as usize, v as usize);
        read += 1;
    }

    if read != m {
        return Err(Error::TruncatedEdgeList {
            expected: m,
            found: read,
        });
    }

    info!("parsed input: N={n} M={m} S={source} K={max_len}");

    Ok(ParsedInput {
        graph,
        source: source as usize,
        max_len: max_len as usize,
    })
}

/// Parse a header token as an integer, reporting it as a header failure on error.
fn parse_int(token: &str) -> Result<i64, Error> {
    token.parse().map_err(|_| Error::HeaderNotInteger {
        token: token.to_string(),
    })
}

/// Parse an edge-line token as an integer, reporting it with its 1-based line number.
fn parse_edge_int(token: &str, line: usize) -> Result<i64, Error> {
    token.parse().map_err(|_| Error::EdgeNotInteger {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            input_path: PathBuf::from("input.txt"),
            output_path: PathBuf::from("output.txt"),
            source_override: None,
            max_len_override: None,
        }
    }

    #[test]
    fn parses_four_field_header_and_edges() {
        let input = "3 3 0 3\n0 1\n1 2\n2 0\n";
        let parsed = parse(input.as_bytes(), &config()).unwrap();
        assert_eq!(parsed.source, 0);
        assert_eq!(parsed.max_len, 3);
        assert_eq!(parsed.graph.neighbors(0), &[1]);
        assert_eq!(parsed.graph.neighbors(2), &[0]);
    }

    #[test]
    fn two_field_header_requires_cli_overrides() {
        let input = "3 3\n0 1\n1 2\n2 0\n";
        let err = parse(input.as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::MissingSource));
    }

    #[test]
    fn cli_overrides_win_over_header() {
        let input = "3 1 0 1\n0 1\n";
        let mut cfg = config();
        cfg.source_override = Some(1);
        cfg.max_len_override = Some(9);
        let parsed = parse(input.as_bytes(), &cfg).unwrap();
        assert_eq!(parsed.source, 1);
        assert_eq!(parsed.max_len, 9);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let input = "2 2 0 2\n0 1\n0 1\n";
        let parsed = parse(input.as_bytes(), &config()).unwrap();
        assert_eq!(parsed.graph.neighbors(0), &[1]);
    }

    #[test]
    fn rejects_non_positive_n() {
        let input = "0 1 0 1\n0 0\n";
        let err = parse(input.as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::NonPositiveN(0)));
    }

    #[test]
    fn rejects_out_of_range_source() {
        let input = "2 1 5 1\n0 1\n";
        let err = parse(input.as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::SourceOutOfRange { s: 5, n: 2 }));
    }

    #[test]
    fn rejects_truncated_edge_list() {
        let input = "3 2 0 1\n0 1\n";
        let err = parse(input.as_bytes(), &config()).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedEdgeList {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_malformed_header_field_count() {
        let input = "3 3 0\n0 1\n";
        let err = parse(input.as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::HeaderFieldCount { found: 3 }));
    }
}
