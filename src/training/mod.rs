//! Forest training.
//!
//! - [`ForestConfig`]: validated training configuration
//! - [`TreeGrower`]: grows one bootstrapped CART tree
//! - [`ForestTrainer`]: bags independently seeded trees into a [`Forest`]
//! - [`evaluate`]: held-out accuracy
//!
//! [`Forest`]: crate::repr::Forest

mod config;
mod grower;
mod trainer;

pub use config::{ConfigError, ForestConfig};
pub use grower::{GrowerParams, TreeGrower};
pub use trainer::{evaluate, EmptyEvaluationSetError, ForestTrainer};
