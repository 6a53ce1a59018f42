//! Networks assembled from layers.
//!
//! Build an [`Mlp`] directly with [`Mlp::new`] or from an [`MlpConfig`] with
//! [`Mlp::from_config`], which validates the configuration first.

pub mod config;
pub mod mlp;

pub use config::MlpConfig;
pub use mlp::Mlp;
