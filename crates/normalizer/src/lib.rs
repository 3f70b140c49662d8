// Module structure for the lognorm structured-value bridge.

// Engine boundary (external collaborator seam)
pub mod engine;

// Bridge core
pub mod error;
pub mod handle;
pub mod metrics;
pub mod service;
pub mod value;

// Re-export the public surface
pub use engine::{Engine, NormalizeOutcome, ResultNode, ResultTree, Status};
pub use error::NormalizeError;
pub use service::Normalizer;

#[cfg(test)]
pub(crate) mod testkit;
