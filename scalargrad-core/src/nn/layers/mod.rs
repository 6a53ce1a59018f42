// src/nn/layers/mod.rs
// Collections of neurons.

pub mod layer;

// Re-export key layer structs
pub use layer::{Layer, LayerOutput};
