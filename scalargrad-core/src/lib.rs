// Main modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;

// Consumers of the engine: network building blocks, models, optimizers
pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;

// Re-export the Value type so it is reachable as `scalargrad_core::Value`
pub use value::{NodeId, OpKind, Value};
// Re-export traits required by the public operator surface (`a.pow(3.0)`, `Value::zero()`)
pub use num_traits;
pub use num_traits::Pow;

pub mod error;
pub use error::ScalarGradError;
