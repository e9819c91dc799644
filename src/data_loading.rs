//! Bulk loading from adjacency-list text files.
//!
//! Each line is a `<vertex> <neighbor>...` declaration, whitespace separated.
//! Blank lines are ignored. Loading is incremental: a failure partway through
//! leaves every edge read before it in the graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::adjacency::{Graph, Vertex};
use crate::error::{GraphError, Result};

fn parse_vertex(token: &str, line: usize) -> Result<Vertex> {
    token.parse().map_err(|source| GraphError::Parse {
        line,
        token: token.to_string(),
        source,
    })
}

impl Graph {
    /// Loads an adjacency-list file into the graph.
    ///
    /// The first token of each line is added as a vertex and every later token
    /// on that line is connected to it.
    pub fn load_from_adjacency_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_adjacency_reader(BufReader::new(file))?;
        tracing::info!(
            "Loaded {}: graph has {} vertices, {} edges",
            path.display(),
            self.vertex_count(),
            self.edge_count()
        );
        Ok(())
    }

    /// Same as [`Graph::load_from_adjacency_file`] for any buffered reader.
    ///
    /// Bytes that are not valid UTF-8 end up in a token that fails to parse,
    /// so they surface as [`GraphError::Parse`]. Only I/O failures are
    /// [`GraphError::Scan`].
    pub fn load_from_adjacency_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut declared = 0;
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(GraphError::Scan)?;
            let line = String::from_utf8_lossy(&bytes);
            let line_number = index + 1;

            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue; // blank line
            };
            let vertex = parse_vertex(first, line_number)?;
            self.add_vertex(vertex);

            for token in tokens {
                let neighbor = parse_vertex(token, line_number)?;
                self.add_edge(vertex, neighbor);
            }
            tracing::trace!("Line {}: declared vertex {}", line_number, vertex);
            declared += 1;
        }
        tracing::debug!("Adjacency list declared {} vertices", declared);
        Ok(())
    }
}
