/// Generic directed weighted graph
///
/// A `WeightedGraph<T>` stores an adjacency map: each vertex owns a map from
/// its out-neighbors to non-negative edge weights. The vertex type only needs
/// equality, hashing and cloning; no ordering is required.
///
/// Mutation follows a boolean contract: `add_vertex` and `add_edge` report
/// failure for invalid input (duplicate vertex, missing endpoint, duplicate
/// edge, negative weight) and leave the graph untouched instead of erroring.
/// Only the adjacency queries with a documented vertex-presence precondition
/// (`neighbors`, `outgoing_edges`) surface a typed error.

use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

use crate::algorithms;

/// Graph query errors
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    /// Adjacency query against a vertex that is not in the graph
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Directed weighted graph over an arbitrary hashable vertex type
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph<T> {
    adjacency: HashMap<T, HashMap<T, u64>>,
}

impl<T> WeightedGraph<T>
where
    T: Eq + Hash + Clone + std::fmt::Debug,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create a graph pre-populated with vertices; duplicates are dropped
    pub fn from_vertices(vertices: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Add a vertex with an empty neighbor map
    ///
    /// Returns false (no mutation) if the vertex is already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    /// Add the directed edge (u, v) with the given weight
    ///
    /// Returns false (no mutation) if either endpoint is absent, the edge
    /// already exists, or the weight is negative. An existing edge is never
    /// overwritten.
    pub fn add_edge(&mut self, u: &T, v: &T, weight: i64) -> bool {
        if weight < 0 || !self.adjacency.contains_key(v) || self.has_edge(u, v) {
            return false;
        }
        match self.adjacency.get_mut(u) {
            Some(neighbors) => {
                neighbors.insert(v.clone(), weight as u64);
                true
            }
            None => false,
        }
    }

    /// Check vertex membership
    pub fn has_vertex(&self, v: &T) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Check for the directed edge (u, v); absent vertices yield false
    pub fn has_edge(&self, u: &T, v: &T) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains_key(v))
    }

    /// |V|
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// |E|: the sum of all outgoing-neighbor-map sizes
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }

    /// Iterate over all vertices in unspecified order
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Out-neighbors of `u`
    ///
    /// Precondition: `u` must be in the graph; otherwise
    /// `GraphError::VertexNotFound` is returned. Callers that cannot
    /// guarantee membership should check `has_vertex` first.
    pub fn neighbors(&self, u: &T) -> GraphResult<impl Iterator<Item = &T>> {
        self.adjacency
            .get(u)
            .map(|n| n.keys())
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", u)))
    }

    /// Out-neighbors of `u` with their edge weights
    ///
    /// Same vertex-presence precondition as `neighbors`.
    pub fn outgoing_edges(&self, u: &T) -> GraphResult<impl Iterator<Item = (&T, u64)>> {
        self.adjacency
            .get(u)
            .map(|n| n.iter().map(|(v, &w)| (v, w)))
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", u)))
    }

    /// Weight of the edge (u, v), or None if it does not exist
    pub fn edge_weight(&self, u: &T, v: &T) -> Option<u64> {
        self.adjacency.get(u).and_then(|n| n.get(v).copied())
    }

    /// Single-source shortest distances to every reachable vertex
    ///
    /// See [`algorithms::dijkstra`] for the algorithm contract.
    pub fn shortest_paths(&self, source: &T) -> HashMap<T, u64> {
        algorithms::dijkstra(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex() {
        let mut g = WeightedGraph::new();
        assert!(g.add_vertex("a"));
        assert!(g.has_vertex(&"a"));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_vertex_duplicate() {
        let mut g = WeightedGraph::new();
        assert!(g.add_vertex(1));
        assert!(!g.add_vertex(1));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_count_matches_distinct_inserts() {
        let mut g = WeightedGraph::new();
        for v in [1, 2, 3, 2, 1, 4] {
            g.add_vertex(v);
        }
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn test_from_vertices_drops_duplicates() {
        let g = WeightedGraph::from_vertices(vec!["x", "y", "x"]);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_add_edge() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2]);
        assert!(g.add_edge(&1, &2, 5));
        assert!(g.has_edge(&1, &2));
        assert_eq!(g.edge_weight(&1, &2), Some(5));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2]);
        assert!(g.add_edge(&1, &2, 5));
        assert!(!g.has_edge(&2, &1));
        assert_eq!(g.edge_weight(&2, &1), None);
    }

    #[test]
    fn test_add_edge_duplicate_is_not_overwrite() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2]);
        assert!(g.add_edge(&1, &2, 5));
        assert!(!g.add_edge(&1, &2, 9));
        assert_eq!(g.edge_weight(&1, &2), Some(5));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut g = WeightedGraph::from_vertices(vec![1]);
        assert!(!g.add_edge(&1, &2, 5));
        assert!(!g.add_edge(&2, &1, 5));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_negative_weight() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2]);
        assert!(!g.add_edge(&1, &2, -1));
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(&1, &2));
    }

    #[test]
    fn test_add_edge_zero_weight() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2]);
        assert!(g.add_edge(&1, &2, 0));
        assert_eq!(g.edge_weight(&1, &2), Some(0));
    }

    #[test]
    fn test_neighbors() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2, 3]);
        g.add_edge(&1, &2, 1);
        g.add_edge(&1, &3, 2);

        let mut neighbors: Vec<i32> = g.neighbors(&1).unwrap().copied().collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![2, 3]);
    }

    #[test]
    fn test_neighbors_missing_vertex() {
        let g: WeightedGraph<i32> = WeightedGraph::new();
        assert!(matches!(
            g.neighbors(&7).map(|_| ()),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_outgoing_edges() {
        let mut g = WeightedGraph::from_vertices(vec!["a", "b"]);
        g.add_edge(&"a", &"b", 3);

        let edges: Vec<(&&str, u64)> = g.outgoing_edges(&"a").unwrap().collect();
        assert_eq!(edges, vec![(&"b", 3)]);
    }

    #[test]
    fn test_edge_count_sums_all_vertices() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2, 3]);
        g.add_edge(&1, &2, 1);
        g.add_edge(&2, &3, 1);
        g.add_edge(&3, &1, 1);
        g.add_edge(&1, &3, 1);
        assert_eq!(g.edge_count(), 4);
    }
}
