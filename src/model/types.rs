//! Rust types mirroring the wizard's job model JSON.
//!
//! These types are the serde target for the frontend job-builder JSON.
//! The model is treated as immutable input: the normalizer and serializer
//! read it, they never write it back.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL JOB MODEL
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobModel {
    /// Used verbatim as the `id` attribute of the `job` root element.
    pub batch_name: String,
    #[serde(default)]
    pub functional_area: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    /// Runtime parameters collected by the wizard. Editor metadata only,
    /// never emitted into the descriptor.
    #[serde(default)]
    pub job_parameters: Vec<JobParameter>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    /// Job-level listener class references.
    #[serde(default)]
    pub listeners: Vec<String>,
    #[serde(default)]
    pub restart_config: Option<JobRestartConfig>,
    pub steps: Vec<StepNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParameter {
    pub name: String,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default, rename = "type")]
    pub param_type: Option<String>,
}

/// A key/value property. `type` is editor metadata and is never emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDef {
    pub key: String,
    pub value: String,
    #[serde(default, rename = "type")]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRestartConfig {
    pub restartable: bool,
    /// Applied to every step; the model has no per-step overrides.
    #[serde(default)]
    pub step_defaults: Option<StepRestartDefaults>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRestartDefaults {
    #[serde(default)]
    pub allow_start_if_complete: Option<bool>,
    #[serde(default)]
    pub start_limit: Option<u32>,
    /// The `step` element has no restartable attribute; editor metadata only.
    #[serde(default)]
    pub restartable: Option<bool>,
}

// =============================================================================
// STEP NODE — tagged union over the five step kinds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StepNode {
    #[serde(rename = "batchlet")]
    Batchlet(StepBase<BatchletConfig>),
    #[serde(rename = "chunk")]
    Chunk(StepBase<ChunkConfig>),
    #[serde(rename = "decision")]
    Decision(StepBase<DecisionConfig>),
    #[serde(rename = "split")]
    Split(StepBase<SplitConfig>),
    #[serde(rename = "flow")]
    Flow(StepBase<FlowConfig>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepBase<C> {
    /// Stable identifier, unique across the whole model. Ownership
    /// references (`parentFlowId`, `flowIds`) point at ids.
    pub id: String,
    /// Display name, unique across the whole model; used as the XML step
    /// id. Transition targets point at names.
    pub name: String,
    /// Back-reference to the owning flow's id, if any.
    #[serde(default)]
    pub parent_flow_id: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    /// Step-level listener class references.
    #[serde(default)]
    pub listeners: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(flatten)]
    pub config: C,
}

impl StepNode {
    pub fn id(&self) -> &str {
        match self {
            StepNode::Batchlet(s) => &s.id,
            StepNode::Chunk(s) => &s.id,
            StepNode::Decision(s) => &s.id,
            StepNode::Split(s) => &s.id,
            StepNode::Flow(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StepNode::Batchlet(s) => &s.name,
            StepNode::Chunk(s) => &s.name,
            StepNode::Decision(s) => &s.name,
            StepNode::Split(s) => &s.name,
            StepNode::Flow(s) => &s.name,
        }
    }

    pub fn parent_flow_id(&self) -> Option<&str> {
        match self {
            StepNode::Batchlet(s) => s.parent_flow_id.as_deref(),
            StepNode::Chunk(s) => s.parent_flow_id.as_deref(),
            StepNode::Decision(s) => s.parent_flow_id.as_deref(),
            StepNode::Split(s) => s.parent_flow_id.as_deref(),
            StepNode::Flow(s) => s.parent_flow_id.as_deref(),
        }
    }

    pub fn transitions(&self) -> &[Transition] {
        match self {
            StepNode::Batchlet(s) => &s.transitions,
            StepNode::Chunk(s) => &s.transitions,
            StepNode::Decision(s) => &s.transitions,
            StepNode::Split(s) => &s.transitions,
            StepNode::Flow(s) => &s.transitions,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            StepNode::Batchlet(_) => "batchlet",
            StepNode::Chunk(_) => "chunk",
            StepNode::Decision(_) => "decision",
            StepNode::Split(_) => "split",
            StepNode::Flow(_) => "flow",
        }
    }

    pub fn is_flow(&self) -> bool {
        matches!(self, StepNode::Flow(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self, StepNode::Split(_))
    }
}

// =============================================================================
// STEP CONFIGS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchletConfig {
    pub batchlet_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkConfig {
    pub reader_class: String,
    #[serde(default)]
    pub processor_class: Option<String>,
    pub writer_class: String,
    #[serde(default)]
    pub checkpoint: Option<CheckpointConfig>,
    #[serde(default)]
    pub partition: Option<PartitionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionConfig {
    pub decider_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfig {
    /// Ordered ids of the Flow steps executed in parallel by this split.
    #[serde(default)]
    pub flow_ids: Vec<String>,
    #[serde(default)]
    pub next_step: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    #[serde(default)]
    pub next_step: Option<String>,
}

// =============================================================================
// CHECKPOINT & PARTITION
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointConfig {
    pub enabled: bool,
    #[serde(default)]
    pub item_count: Option<u32>,
    #[serde(default)]
    pub time_limit: Option<u32>,
    /// Custom checkpoint algorithm class.
    #[serde(default)]
    pub policy_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionConfig {
    pub enabled: bool,
    /// Either a mapper class or a fixed partition count supplies the plan.
    #[serde(default)]
    pub mapper_class: Option<String>,
    #[serde(default)]
    pub partitions: Option<u32>,
    #[serde(default)]
    pub collector_class: Option<String>,
    #[serde(default)]
    pub analyzer_class: Option<String>,
    #[serde(default)]
    pub reducer_class: Option<String>,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// A rule mapping a matched exit status to the next action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Transition {
    /// Continue to the step whose display name is `to`.
    #[serde(rename = "continueToStep")]
    Next { on: String, to: String },
    #[serde(rename = "fail")]
    Fail {
        on: String,
        #[serde(default, rename = "exitStatus")]
        exit_status: Option<String>,
    },
    #[serde(rename = "stop")]
    Stop {
        on: String,
        #[serde(default)]
        restart: Option<String>,
    },
    #[serde(rename = "end")]
    End {
        on: String,
        #[serde(default, rename = "exitStatus")]
        exit_status: Option<String>,
    },
}

impl Transition {
    pub fn on(&self) -> &str {
        match self {
            Transition::Next { on, .. }
            | Transition::Fail { on, .. }
            | Transition::Stop { on, .. }
            | Transition::End { on, .. } => on,
        }
    }

    /// Target step name for continue-to-step transitions.
    pub fn target(&self) -> Option<&str> {
        match self {
            Transition::Next { to, .. } => Some(to),
            _ => None,
        }
    }
}
