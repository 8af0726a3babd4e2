/// Graph algorithms module
///
/// Shortest-path search over `WeightedGraph`.

pub mod shortest_path;

pub use shortest_path::dijkstra;
