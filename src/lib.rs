/// charsep
///
/// Whitespace separator detection in bitmap images of text, built on a
/// generic weighted-graph shortest-path core.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │                  charsep                         │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Bitmap loader (image)        │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Separation analyzer          │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   WeightedGraph + Dijkstra     │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (Pixel, PixelMatrix)
/// - `graph`: Generic directed weighted graph
/// - `algorithms`: Shortest-path search (Dijkstra)
/// - `separator`: Whitespace separation analyzer
/// - `bitmap`: Image file decoding and overlay output
/// - `tools`: Result export utilities (CSV/JSON)

pub mod algorithms;
pub mod bitmap;
pub mod graph;
pub mod separator;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{MatrixError, Pixel, PixelMatrix};

// Re-export graph types
pub use graph::{GraphError, GraphResult, WeightedGraph};

// Re-export algorithm entry points
pub use algorithms::dijkstra;

// Re-export separator types
pub use separator::{
    find_separation, find_separation_in_file, Separation, SeparatorError, SeparatorResult,
    WHITESPACE,
};

// Re-export bitmap types
pub use bitmap::{load_matrix, write_overlay, BitmapError, BitmapResult};

// Re-export tool types
pub use tools::{export_to_csv, export_to_json, ExportOptions, ToolError, ToolResult};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
