use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::adjacency::Vertex;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {token:?} is not a vertex id: {source}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed reading adjacency list: {0}")]
    Scan(#[source] io::Error),
    #[error("start vertex {0} not found")]
    StartVertexNotFound(Vertex),
    #[error("end vertex {0} not found")]
    EndVertexNotFound(Vertex),
    #[error("no path found from {start} to {end}")]
    NoPath { start: Vertex, end: Vertex },
}
