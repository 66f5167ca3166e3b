//! Error types for the model and serialization phases.
//!
//! Validator findings are data (`validate::Issue`), never errors; only the
//! model-facing phases raise.

use thiserror::Error;

/// A defect in the in-memory job model, reported by `model::parse` or the
/// normalizer. Normalization collects every defect before failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("failed to parse job model JSON: {0}")]
    Parse(String),

    #[error("duplicate step id '{id}'")]
    DuplicateStepId { id: String },

    #[error("duplicate step name '{name}'")]
    DuplicateStepName { name: String },

    #[error("step '{step}' transitions on '{on}' to unknown step '{target}'")]
    UnresolvedTransition {
        step: String,
        on: String,
        target: String,
    },

    #[error("split '{split}' references unknown flow '{flow_id}'")]
    DanglingFlowReference { split: String, flow_id: String },

    #[error("split '{split}' references step '{flow_id}' which is not a flow")]
    NotAFlow { split: String, flow_id: String },

    #[error("step '{step}' names unknown parent flow '{parent_id}'")]
    DanglingParent { step: String, parent_id: String },

    #[error("step '{step}' names parent '{parent_id}' which cannot contain steps")]
    InvalidParent { step: String, parent_id: String },

    #[error("flow '{flow}' is owned by both a split and a parent flow")]
    ConflictingOwnership { flow: String },

    #[error("flow ownership references form a cycle")]
    OwnershipCycle,
}

/// A step that cannot be rendered as valid markup. Raised instead of
/// emitting a partial document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    #[error("job id must not be empty")]
    EmptyJobId,

    #[error("batchlet step '{step}' has no implementation class")]
    MissingBatchletClass { step: String },

    #[error("chunk step '{step}' has no reader class")]
    MissingReader { step: String },

    #[error("chunk step '{step}' has no writer class")]
    MissingWriter { step: String },

    #[error("decision '{step}' has no decider class")]
    MissingDeciderClass { step: String },

    #[error("decision '{step}' has no transitions")]
    DecisionWithoutTransitions { step: String },

    #[error("partitioned step '{step}' has neither a mapper class nor a partition count")]
    PartitionWithoutSource { step: String },
}
