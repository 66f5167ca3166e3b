#![allow(dead_code)]

use jsl::model::types::*;

// =============================================================================
// Job model builders
// =============================================================================

/// Minimal restartable job model wrapping the given steps.
pub fn base_model(steps: Vec<StepNode>) -> JobModel {
    JobModel {
        batch_name: "test_job".into(),
        functional_area: None,
        frequency: None,
        package_name: None,
        job_parameters: vec![],
        properties: vec![],
        listeners: vec![],
        restart_config: Some(JobRestartConfig {
            restartable: true,
            step_defaults: None,
        }),
        steps,
    }
}

pub fn base<C>(id: &str, name: &str, config: C) -> StepBase<C> {
    StepBase {
        id: id.into(),
        name: name.into(),
        parent_flow_id: None,
        properties: vec![],
        listeners: vec![],
        transitions: vec![],
        config,
    }
}

pub fn batchlet_step(id: &str, name: &str, class: &str) -> StepNode {
    let mut step = base(
        id,
        name,
        BatchletConfig {
            batchlet_class: class.into(),
        },
    );
    step.transitions = vec![end_on("COMPLETED")];
    StepNode::Batchlet(step)
}

pub fn chunk_step(id: &str, name: &str) -> StepNode {
    StepNode::Chunk(base(
        id,
        name,
        ChunkConfig {
            reader_class: "com.test.TestReader".into(),
            processor_class: Some("com.test.TestProcessor".into()),
            writer_class: "com.test.TestWriter".into(),
            checkpoint: Some(CheckpointConfig {
                enabled: true,
                item_count: Some(1000),
                time_limit: None,
                policy_class: None,
            }),
            partition: None,
        },
    ))
}

pub fn decision_step(id: &str, name: &str, class: &str) -> StepNode {
    let mut step = base(
        id,
        name,
        DecisionConfig {
            decider_class: class.into(),
        },
    );
    step.transitions = vec![end_on("COMPLETED")];
    StepNode::Decision(step)
}

pub fn flow_step(id: &str, name: &str, parent_flow_id: Option<&str>) -> StepNode {
    let mut step = base(id, name, FlowConfig { next_step: None });
    step.parent_flow_id = parent_flow_id.map(Into::into);
    StepNode::Flow(step)
}

pub fn split_step(id: &str, name: &str, flow_ids: &[&str]) -> StepNode {
    StepNode::Split(base(
        id,
        name,
        SplitConfig {
            flow_ids: flow_ids.iter().map(|f| f.to_string()).collect(),
            next_step: None,
        },
    ))
}

/// Attach a step below the named flow.
pub fn in_flow(step: StepNode, flow_id: &str) -> StepNode {
    match step {
        StepNode::Batchlet(mut s) => {
            s.parent_flow_id = Some(flow_id.into());
            StepNode::Batchlet(s)
        }
        StepNode::Chunk(mut s) => {
            s.parent_flow_id = Some(flow_id.into());
            StepNode::Chunk(s)
        }
        StepNode::Decision(mut s) => {
            s.parent_flow_id = Some(flow_id.into());
            StepNode::Decision(s)
        }
        StepNode::Split(mut s) => {
            s.parent_flow_id = Some(flow_id.into());
            StepNode::Split(s)
        }
        StepNode::Flow(mut s) => {
            s.parent_flow_id = Some(flow_id.into());
            StepNode::Flow(s)
        }
    }
}

pub fn prop(key: &str, value: &str) -> PropertyDef {
    PropertyDef {
        key: key.into(),
        value: value.into(),
        value_type: None,
    }
}

pub fn end_on(on: &str) -> Transition {
    Transition::End {
        on: on.into(),
        exit_status: None,
    }
}

pub fn next_on(on: &str, to: &str) -> Transition {
    Transition::Next {
        on: on.into(),
        to: to.into(),
    }
}
