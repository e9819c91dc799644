//! Undirected adjacency structure: every vertex maps to the set of its neighbors.

use std::collections::{HashMap, HashSet};

pub type Vertex = i64;

/// An undirected graph. `w` is in `v`'s neighbor set exactly when `v` is in `w`'s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adjacency: HashMap<Vertex, HashSet<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Adds `v` with no neighbors. Does nothing if `v` is already present.
    pub fn add_vertex(&mut self, v: Vertex) {
        self.adjacency.entry(v).or_default();
    }

    /// Removes `v` and every edge touching it. Absent vertices are ignored.
    pub fn remove_vertex(&mut self, v: Vertex) {
        self.adjacency.remove(&v); // removes vertex from keys
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(&v);
        } // removes vertex from each neighbor set
    }

    /// Connects `v1` and `v2`, creating either endpoint if needed.
    ///
    /// `add_edge(v, v)` records a self-loop: `v` becomes its own neighbor.
    pub fn add_edge(&mut self, v1: Vertex, v2: Vertex) {
        self.adjacency.entry(v1).or_default().insert(v2);
        self.adjacency.entry(v2).or_default().insert(v1);
    }

    /// Disconnects `v1` and `v2`. Missing vertices or edges are ignored.
    pub fn remove_edge(&mut self, v1: Vertex, v2: Vertex) {
        if let Some(neighbors) = self.adjacency.get_mut(&v1) {
            neighbors.remove(&v2);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&v2) {
            neighbors.remove(&v1);
        }
    }

    /// True if `v` is present and has no neighbors.
    ///
    /// An absent vertex is reported as not isolated; use [`Graph::contains_vertex`]
    /// to tell the two cases apart.
    pub fn is_isolated(&self, v: Vertex) -> bool {
        self.adjacency
            .get(&v)
            .is_some_and(|neighbors| neighbors.is_empty())
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn has_edge(&self, v1: Vertex, v2: Vertex) -> bool {
        self.adjacency
            .get(&v1)
            .is_some_and(|neighbors| neighbors.contains(&v2))
    }

    pub fn neighbors(&self, v: Vertex) -> Option<&HashSet<Vertex>> {
        self.adjacency.get(&v)
    }

    pub fn degree(&self, v: Vertex) -> Option<usize> {
        self.adjacency.get(&v).map(HashSet::len)
    }

    /// Iterate over all vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(&v, neighbors)| neighbors.iter().filter(|&&w| v <= w).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
