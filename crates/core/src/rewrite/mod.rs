//! Sequence rewriting and reconstruction.
//!
//! - `merge`: apply one merge to a token sequence
//! - `render`: one-level display and full decoding back to bytes
//! - `graph`: merge tree export as a directed edge list

pub mod graph;
pub mod merge;
pub mod render;

pub use graph::{export_graph, to_dot, Edge};
pub use merge::{apply_merge, count_matches};
pub use render::{decode, render};
