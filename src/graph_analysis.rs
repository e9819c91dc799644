use std::collections::{HashSet, VecDeque};

use crate::adjacency::{Graph, Vertex};
use crate::error::{GraphError, Result};

impl Graph {
    /// Minimum number of edges between `start` and `end`, found by breadth-first search.
    ///
    /// Both endpoints must exist before traversal begins, so a missing `end`
    /// is reported even when `start == end`.
    pub fn shortest_path(&self, start: Vertex, end: Vertex) -> Result<usize> {
        if !self.contains_vertex(start) {
            return Err(GraphError::StartVertexNotFound(start));
        }
        if !self.contains_vertex(end) {
            return Err(GraphError::EndVertexNotFound(end));
        }

        let mut queue: VecDeque<(Vertex, usize)> = VecDeque::new();
        let mut visited: HashSet<Vertex> = HashSet::new();
        queue.push_back((start, 0)); // vertex, hops from start
        visited.insert(start);

        while let Some((current, hops)) = queue.pop_front() {
            if current == end {
                tracing::debug!("Shortest path {} -> {}: {} hops", start, end, hops);
                return Ok(hops);
            }

            if let Some(neighbors) = self.neighbors(current) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        queue.push_back((neighbor, hops + 1));
                    } // queue each vertex once, at its first (shallowest) discovery
                }
            }
        }

        tracing::debug!("No path {} -> {} after visiting {} vertices", start, end, visited.len());
        Err(GraphError::NoPath { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph
    }

    #[test]
    fn test_shortest_path_on_chain() {
        let graph = chain();
        assert_eq!(graph.shortest_path(1, 4).unwrap(), 3);
        assert_eq!(graph.shortest_path(4, 1).unwrap(), 3);
        assert_eq!(graph.shortest_path(2, 3).unwrap(), 1);
    }

    #[test]
    fn test_shortest_path_to_self() {
        let graph = chain();
        assert_eq!(graph.shortest_path(1, 1).unwrap(), 0);

        let mut single = Graph::new();
        single.add_vertex(9);
        assert_eq!(single.shortest_path(9, 9).unwrap(), 0);
    }

    #[test]
    fn test_missing_endpoints() {
        let graph = chain();
        assert!(matches!(
            graph.shortest_path(1, 5),
            Err(GraphError::EndVertexNotFound(5))
        ));
        assert!(matches!(
            graph.shortest_path(0, 1),
            Err(GraphError::StartVertexNotFound(0))
        ));
        // start is checked first
        assert!(matches!(
            graph.shortest_path(7, 8),
            Err(GraphError::StartVertexNotFound(7))
        ));
        assert!(matches!(
            Graph::new().shortest_path(3, 3),
            Err(GraphError::StartVertexNotFound(3))
        ));
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = chain();
        graph.add_edge(10, 11);
        graph.add_vertex(20);

        assert!(matches!(
            graph.shortest_path(1, 11),
            Err(GraphError::NoPath { start: 1, end: 11 })
        ));
        assert!(matches!(
            graph.shortest_path(20, 4),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_shortest_path_picks_shorter_route() {
        // long way round: 1-2-3-4-5, shortcut: 1-6-5
        let mut graph = chain();
        graph.add_edge(4, 5);
        graph.add_edge(1, 6);
        graph.add_edge(6, 5);
        assert_eq!(graph.shortest_path(1, 5).unwrap(), 2);
        assert_eq!(graph.shortest_path(2, 6).unwrap(), 2);
        assert_eq!(graph.shortest_path(3, 6).unwrap(), 3);
    }

    #[test]
    fn test_shortest_path_after_removal() {
        let mut graph = chain();
        graph.add_edge(1, 3);
        assert_eq!(graph.shortest_path(1, 4).unwrap(), 2);

        graph.remove_edge(1, 3);
        assert_eq!(graph.shortest_path(1, 4).unwrap(), 3);

        graph.remove_vertex(2);
        assert!(matches!(
            graph.shortest_path(1, 4),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_self_loop_does_not_affect_distance() {
        let mut graph = chain();
        graph.add_edge(2, 2);
        assert_eq!(graph.shortest_path(1, 4).unwrap(), 3);
    }

    #[test]
    fn test_error_messages() {
        let graph = chain();
        assert_eq!(
            graph.shortest_path(0, 1).unwrap_err().to_string(),
            "start vertex 0 not found"
        );
        assert_eq!(
            graph.shortest_path(1, 5).unwrap_err().to_string(),
            "end vertex 5 not found"
        );
    }
}
