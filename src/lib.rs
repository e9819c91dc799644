//! Undirected graph over integer vertices with adjacency-list loading
//! and hop-count shortest paths.

pub mod adjacency;
pub mod data_loading;
pub mod error;
pub mod graph_analysis;

pub use adjacency::{Graph, Vertex};
pub use error::{GraphError, Result};
