//! Model phase: wizard JSON → Rust types + ownership graph construction.

pub mod graph;
pub mod types;

pub use graph::OwnershipGraph;
pub use types::*;

use crate::error::ModelError;

/// Deserialize a job model JSON string into a `JobModel` struct.
pub fn parse(json: &str) -> Result<JobModel, ModelError> {
    serde_json::from_str::<JobModel>(json).map_err(|e| ModelError::Parse(e.to_string()))
}
