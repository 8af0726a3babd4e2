/// Shortest path algorithms
///
/// Implements single-source Dijkstra over a `WeightedGraph`.

use crate::graph::WeightedGraph;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Node in priority queue for Dijkstra's algorithm
///
/// Ordered by accumulated distance only (reversed for a min-heap), so the
/// vertex type does not need `Ord`. Ties between equal-distance entries are
/// left unbroken; either pop order yields the same distances.
#[derive(Debug, Clone)]
struct DijkstraNode<T> {
    vertex: T,
    dist: u64,
}

impl<T> PartialEq for DijkstraNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl<T> Eq for DijkstraNode<T> {}

impl<T> Ord for DijkstraNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.dist.cmp(&self.dist)
    }
}

impl<T> PartialOrd for DijkstraNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest distances via Dijkstra's algorithm
///
/// Returns a map from every vertex reachable from `source` to its minimal
/// cumulative distance; `source` itself maps to 0. Unreachable vertices are
/// absent from the map, never present with an infinity sentinel. If `source`
/// is not a vertex of the graph, the map is empty.
///
/// The heap may hold stale entries superseded by a later relaxation; a
/// visited set discards them on pop instead of supporting decrease-key.
/// Worst case O((V+E) log V). Were negative weights present the loop would
/// still terminate (each vertex is finalized at most once) but the distances
/// would be undefined; `WeightedGraph::add_edge` rejects them at insertion.
pub fn dijkstra<T>(graph: &WeightedGraph<T>, source: &T) -> HashMap<T, u64>
where
    T: Eq + Hash + Clone + std::fmt::Debug,
{
    let mut distances: HashMap<T, u64> = HashMap::new();

    if !graph.has_vertex(source) {
        return distances;
    }

    let mut heap = BinaryHeap::new();
    let mut visited: HashSet<T> = HashSet::new();

    heap.push(DijkstraNode {
        vertex: source.clone(),
        dist: 0,
    });
    distances.insert(source.clone(), 0);

    while let Some(DijkstraNode { vertex, dist }) = heap.pop() {
        // Skip stale entries for already-finalized vertices
        if visited.contains(&vertex) {
            continue;
        }
        visited.insert(vertex.clone());

        // Every heap entry was pushed for a vertex present in the graph
        let Ok(edges) = graph.outgoing_edges(&vertex) else {
            continue;
        };

        for (neighbor, weight) in edges {
            let candidate = dist + weight;

            let is_better = distances
                .get(neighbor)
                .map(|&current| candidate < current)
                .unwrap_or(true);

            if is_better {
                distances.insert(neighbor.clone(), candidate);
                heap.push(DijkstraNode {
                    vertex: neighbor.clone(),
                    dist: candidate,
                });
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph(weights: &[i64]) -> WeightedGraph<usize> {
        // 0 -> 1 -> 2 -> ... with the given weights
        let mut g = WeightedGraph::from_vertices(0..=weights.len());
        for (i, &w) in weights.iter().enumerate() {
            assert!(g.add_edge(&i, &(i + 1), w));
        }
        g
    }

    #[test]
    fn test_missing_source_returns_empty() {
        let g: WeightedGraph<i32> = WeightedGraph::new();
        assert!(dijkstra(&g, &1).is_empty());
    }

    #[test]
    fn test_single_vertex() {
        let g = WeightedGraph::from_vertices(vec![42]);
        let result = dijkstra(&g, &42);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(&42), Some(&0));
    }

    #[test]
    fn test_disconnected_vertex_excluded() {
        let mut g = WeightedGraph::from_vertices(vec![1, 2, 3]);
        g.add_edge(&1, &2, 4);
        // 3 has no incoming edges

        let result = dijkstra(&g, &1);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(&1), Some(&0));
        assert_eq!(result.get(&2), Some(&4));
        assert!(!result.contains_key(&3));
    }

    #[test]
    fn test_line_accumulates_weights() {
        let g = line_graph(&[2, 3, 5]);
        let result = dijkstra(&g, &0);
        assert_eq!(result.get(&0), Some(&0));
        assert_eq!(result.get(&1), Some(&2));
        assert_eq!(result.get(&2), Some(&5));
        assert_eq!(result.get(&3), Some(&10));
    }

    #[test]
    fn test_relaxation_prefers_cheaper_path() {
        // 0 -> 2 direct costs 10; 0 -> 1 -> 2 costs 3
        let mut g = WeightedGraph::from_vertices(vec![0, 1, 2]);
        g.add_edge(&0, &2, 10);
        g.add_edge(&0, &1, 1);
        g.add_edge(&1, &2, 2);

        let result = dijkstra(&g, &0);
        assert_eq!(result.get(&2), Some(&3));
    }

    #[test]
    fn test_direction_respected() {
        let mut g = WeightedGraph::from_vertices(vec![0, 1]);
        g.add_edge(&0, &1, 1);

        let from_sink = dijkstra(&g, &1);
        assert_eq!(from_sink.len(), 1);
        assert_eq!(from_sink.get(&1), Some(&0));
    }

    #[test]
    fn test_grid_corner_yields_manhattan_distances() {
        // r x c grid, uniform weight 1 on all 4-neighbor edges
        let (r, c) = (4usize, 5usize);
        let mut g = WeightedGraph::new();
        for i in 0..r {
            for j in 0..c {
                g.add_vertex((i, j));
            }
        }
        for i in 0..r {
            for j in 0..c {
                if i + 1 < r {
                    g.add_edge(&(i, j), &(i + 1, j), 1);
                    g.add_edge(&(i + 1, j), &(i, j), 1);
                }
                if j + 1 < c {
                    g.add_edge(&(i, j), &(i, j + 1), 1);
                    g.add_edge(&(i, j + 1), &(i, j), 1);
                }
            }
        }

        let result = dijkstra(&g, &(0, 0));
        assert_eq!(result.len(), r * c);
        for i in 0..r {
            for j in 0..c {
                assert_eq!(result.get(&(i, j)), Some(&((i + j) as u64)));
            }
        }
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = line_graph(&[0, 0, 1]);
        let result = dijkstra(&g, &0);
        assert_eq!(result.get(&2), Some(&0));
        assert_eq!(result.get(&3), Some(&1));
    }
}
