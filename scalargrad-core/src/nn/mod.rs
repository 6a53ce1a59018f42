// src/nn/mod.rs
// Neural network building blocks composed from scalar values.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::Init;
pub use layers::{Layer, LayerOutput};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use neuron::{Activation, Neuron};
