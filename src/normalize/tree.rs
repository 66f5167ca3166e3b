//! Canonical job tree consumed by the serializer.
//!
//! Flow membership is resolved exactly once, by the normalizer; nothing
//! downstream re-derives ownership from ids.

use serde::{Deserialize, Serialize};

use crate::model::types::{
    BatchletConfig, ChunkConfig, PropertyDef, StepRestartDefaults, Transition,
};

/// Fully normalized job: metadata plus the ordered element tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTree {
    /// The `id` attribute of the `job` root element.
    pub id: String,
    pub restartable: bool,
    /// Mirrored onto every `step` element when present.
    pub step_defaults: Option<StepRestartDefaults>,
    pub properties: Vec<PropertyDef>,
    pub listeners: Vec<String>,
    pub elements: Vec<JobElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JobElement {
    Step(StepElement),
    Decision(DecisionElement),
    Split(SplitElement),
    Flow(FlowElement),
}

/// A `step` element: a batchlet or a chunk with its surrounding blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepElement {
    pub name: String,
    pub properties: Vec<PropertyDef>,
    pub listeners: Vec<String>,
    pub transitions: Vec<Transition>,
    pub payload: StepPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepPayload {
    Batchlet(BatchletConfig),
    Chunk(ChunkConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionElement {
    pub name: String,
    pub decider_class: String,
    pub properties: Vec<PropertyDef>,
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitElement {
    pub name: String,
    pub next: Option<String>,
    pub flows: Vec<FlowElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowElement {
    pub name: String,
    pub next: Option<String>,
    pub properties: Vec<PropertyDef>,
    pub children: Vec<JobElement>,
}
