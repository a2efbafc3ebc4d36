/*!
# Dataset Loader

Reads the §6 dataset file format: UTF-8 text, one edge per line, two non-negative
integers separated by one or more whitespace characters, with blank lines and
`#`-prefixed lines skipped. Anything else on a non-skipped line is a malformed-input
error — this loader does not interpret or drop partial lines silently the way the
edge *de-duplication* step does; only [`crate::core::graph::Graph::build`]
deduplicates and drops self-loops.
*/

use crate::core::error::DsgError;
use crate::core::graph::Graph;
use crate::core::id::IdMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses one line of the dataset format into an `(u_ext, v_ext)` pair, or `None`
/// if the line should be skipped (blank, or `#`-prefixed).
fn parse_line(line: &str) -> Result<Option<(u64, u64)>, DsgError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let mut tokens = trimmed.split_whitespace();
    let u = tokens.next().ok_or_else(|| {
        DsgError::MalformedInput(format!("expected two integers, got: {:?}", line))
    })?;
    let v = tokens.next().ok_or_else(|| {
        DsgError::MalformedInput(format!("expected two integers, got: {:?}", line))
    })?;
    if tokens.next().is_some() {
        return Err(DsgError::MalformedInput(format!(
            "expected exactly two integers, got: {:?}",
            line
        )));
    }
    let u: u64 = u
        .parse()
        .map_err(|_| DsgError::MalformedInput(format!("not an integer: {:?}", u)))?;
    let v: u64 = v
        .parse()
        .map_err(|_| DsgError::MalformedInput(format!("not an integer: {:?}", v)))?;
    Ok(Some((u, v)))
}

/// Reads an edge list from `path` in the §6 format and builds a [`Graph`].
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<(Graph, IdMap), DsgError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut edges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(edge) = parse_line(&line)? {
            edges.push(edge);
        }
    }
    Ok(Graph::build(edges))
}
