// src/graph/mod.rs
//! Word-adjacency graph: normalization, construction and rendering.

pub mod builder;
pub mod dot;
pub mod model;
pub mod text;

pub use builder::GraphBuilder;
pub use model::{Edges, WordGraph};
