//! Per-kind element emitters.
//!
//! Child order inside a `step` is fixed: properties → listeners → payload
//! → partition → transitions.

use super::writer::XmlWriter;
use crate::error::SerializationError;
use crate::model::types::{
    CheckpointConfig, ChunkConfig, PartitionConfig, PropertyDef, StepRestartDefaults, Transition,
};
use crate::normalize::tree::{
    DecisionElement, FlowElement, JobElement, SplitElement, StepElement, StepPayload,
};

pub fn emit_element(
    element: &JobElement,
    defaults: Option<&StepRestartDefaults>,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    match element {
        JobElement::Step(step) => emit_step(step, defaults, w),
        JobElement::Decision(decision) => emit_decision(decision, w),
        JobElement::Split(split) => emit_split(split, defaults, w),
        JobElement::Flow(flow) => emit_flow(flow, defaults, w),
    }
}

fn emit_step(
    step: &StepElement,
    defaults: Option<&StepRestartDefaults>,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    let start_limit = defaults
        .and_then(|d| d.start_limit)
        .map(|n| n.to_string());
    let allow_start = defaults
        .and_then(|d| d.allow_start_if_complete)
        .map(|b| if b { "true" } else { "false" });

    let mut attrs: Vec<(&str, &str)> = vec![("id", step.name.as_str())];
    if let Some(limit) = &start_limit {
        attrs.push(("start-limit", limit));
    }
    if let Some(allow) = allow_start {
        attrs.push(("allow-start-if-complete", allow));
    }

    w.open("step", &attrs);
    emit_properties(&step.properties, w);
    emit_listeners(&step.listeners, w);

    match &step.payload {
        StepPayload::Batchlet(batchlet) => {
            if batchlet.batchlet_class.trim().is_empty() {
                return Err(SerializationError::MissingBatchletClass {
                    step: step.name.clone(),
                });
            }
            w.empty("batchlet", &[("ref", &batchlet.batchlet_class)]);
        }
        StepPayload::Chunk(chunk) => {
            emit_chunk(&step.name, chunk, w)?;
            if let Some(partition) = chunk.partition.as_ref().filter(|p| p.enabled) {
                emit_partition(&step.name, partition, w)?;
            }
        }
    }

    emit_transitions(&step.transitions, w);
    w.close();
    Ok(())
}

fn emit_chunk(
    step_name: &str,
    chunk: &ChunkConfig,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    if chunk.reader_class.trim().is_empty() {
        return Err(SerializationError::MissingReader {
            step: step_name.to_string(),
        });
    }
    if chunk.writer_class.trim().is_empty() {
        return Err(SerializationError::MissingWriter {
            step: step_name.to_string(),
        });
    }

    let checkpoint = chunk.checkpoint.as_ref().filter(|c| c.enabled);
    let policy = checkpoint.map(checkpoint_policy);
    let item_count = checkpoint
        .and_then(|c| c.item_count)
        .map(|n| n.to_string());
    let time_limit = checkpoint
        .and_then(|c| c.time_limit)
        .map(|n| n.to_string());

    let mut attrs: Vec<(&str, &str)> = Vec::new();
    if let Some(policy) = policy {
        attrs.push(("checkpoint-policy", policy));
    }
    if let Some(count) = &item_count {
        attrs.push(("item-count", count));
    }
    if let Some(limit) = &time_limit {
        attrs.push(("time-limit", limit));
    }

    w.open("chunk", &attrs);
    w.empty("reader", &[("ref", &chunk.reader_class)]);
    if let Some(processor) = non_empty(chunk.processor_class.as_deref()) {
        w.empty("processor", &[("ref", processor)]);
    }
    w.empty("writer", &[("ref", &chunk.writer_class)]);
    if let Some(algorithm) = checkpoint.and_then(|c| non_empty(c.policy_class.as_deref())) {
        w.empty("checkpoint-algorithm", &[("ref", algorithm)]);
    }
    w.close();
    Ok(())
}

/// Commit basis for an enabled checkpoint configuration: a custom policy
/// class wins, a time-limit-only configuration commits on time, item count
/// otherwise.
fn checkpoint_policy(checkpoint: &CheckpointConfig) -> &'static str {
    if non_empty(checkpoint.policy_class.as_deref()).is_some() {
        "custom"
    } else if checkpoint.time_limit.is_some() && checkpoint.item_count.is_none() {
        "time"
    } else {
        "item"
    }
}

fn emit_partition(
    step_name: &str,
    partition: &PartitionConfig,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    let mapper = non_empty(partition.mapper_class.as_deref());
    let plan = partition.partitions.map(|n| n.to_string());
    if mapper.is_none() && plan.is_none() {
        return Err(SerializationError::PartitionWithoutSource {
            step: step_name.to_string(),
        });
    }

    w.open("partition", &[]);
    match (mapper, &plan) {
        (Some(mapper), _) => w.empty("mapper", &[("ref", mapper)]),
        (None, Some(partitions)) => w.empty("plan", &[("partitions", partitions)]),
        (None, None) => {}
    }
    if let Some(collector) = non_empty(partition.collector_class.as_deref()) {
        w.empty("collector", &[("ref", collector)]);
    }
    if let Some(analyzer) = non_empty(partition.analyzer_class.as_deref()) {
        w.empty("analyzer", &[("ref", analyzer)]);
    }
    if let Some(reducer) = non_empty(partition.reducer_class.as_deref()) {
        w.empty("reducer", &[("ref", reducer)]);
    }
    w.close();
    Ok(())
}

fn emit_decision(decision: &DecisionElement, w: &mut XmlWriter) -> Result<(), SerializationError> {
    if decision.decider_class.trim().is_empty() {
        return Err(SerializationError::MissingDeciderClass {
            step: decision.name.clone(),
        });
    }
    if decision.transitions.is_empty() {
        return Err(SerializationError::DecisionWithoutTransitions {
            step: decision.name.clone(),
        });
    }

    w.open(
        "decision",
        &[("id", &decision.name), ("ref", &decision.decider_class)],
    );
    emit_properties(&decision.properties, w);
    emit_transitions(&decision.transitions, w);
    w.close();
    Ok(())
}

fn emit_split(
    split: &SplitElement,
    defaults: Option<&StepRestartDefaults>,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    let mut attrs: Vec<(&str, &str)> = vec![("id", split.name.as_str())];
    if let Some(next) = &split.next {
        attrs.push(("next", next));
    }

    w.open("split", &attrs);
    for flow in &split.flows {
        emit_flow(flow, defaults, w)?;
    }
    w.close();
    Ok(())
}

fn emit_flow(
    flow: &FlowElement,
    defaults: Option<&StepRestartDefaults>,
    w: &mut XmlWriter,
) -> Result<(), SerializationError> {
    let mut attrs: Vec<(&str, &str)> = vec![("id", flow.name.as_str())];
    if let Some(next) = &flow.next {
        attrs.push(("next", next));
    }

    w.open("flow", &attrs);
    emit_properties(&flow.properties, w);
    for child in &flow.children {
        emit_element(child, defaults, w)?;
    }
    w.close();
    Ok(())
}

pub fn emit_properties(properties: &[PropertyDef], w: &mut XmlWriter) {
    if properties.is_empty() {
        return;
    }
    w.open("properties", &[]);
    for property in properties {
        w.empty(
            "property",
            &[("name", &property.key), ("value", &property.value)],
        );
    }
    w.close();
}

pub fn emit_listeners(listeners: &[String], w: &mut XmlWriter) {
    if listeners.is_empty() {
        return;
    }
    w.open("listeners", &[]);
    for listener in listeners {
        w.empty("listener", &[("ref", listener)]);
    }
    w.close();
}

fn emit_transitions(transitions: &[Transition], w: &mut XmlWriter) {
    for transition in transitions {
        match transition {
            Transition::Next { on, to } => w.empty("next", &[("on", on), ("to", to)]),
            Transition::Fail { on, exit_status } => {
                let mut attrs: Vec<(&str, &str)> = vec![("on", on)];
                if let Some(status) = exit_status {
                    attrs.push(("exit-status", status));
                }
                w.empty("fail", &attrs);
            }
            Transition::Stop { on, restart } => {
                let mut attrs: Vec<(&str, &str)> = vec![("on", on)];
                if let Some(restart) = restart {
                    attrs.push(("restart", restart));
                }
                w.empty("stop", &attrs);
            }
            Transition::End { on, exit_status } => {
                let mut attrs: Vec<(&str, &str)> = vec![("on", on)];
                if let Some(status) = exit_status {
                    attrs.push(("exit-status", status));
                }
                w.empty("end", &attrs);
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
