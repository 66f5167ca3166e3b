//! Normalization phase: JobModel → JobTree.
//!
//! Re-shapes the flat step collection into the canonical tree: flows
//! referenced by `parentFlowId` and split `flowIds` are removed from the
//! flat list and attached as children of their owning container, in
//! original relative order. Reference checks run first and every defect is
//! collected before failing; no class-name or markup validation happens
//! here.

pub mod tree;

use std::collections::{HashMap, HashSet};

use crate::error::ModelError;
use crate::model::graph::OwnershipGraph;
use crate::model::types::*;
use tree::*;

/// Normalize a job model into the canonical element tree.
pub fn normalize(model: &JobModel) -> Result<JobTree, Vec<ModelError>> {
    let graph = OwnershipGraph::build(model);
    let by_id: HashMap<&str, &StepNode> = model.steps.iter().map(|s| (s.id(), s)).collect();

    let errors = check_references(model, &by_id, &graph);
    if !errors.is_empty() {
        return Err(errors);
    }

    let owned = owned_ids(model);

    let elements = model
        .steps
        .iter()
        .filter(|s| !owned.contains(s.id()))
        .map(|s| build_element(s, model, &by_id))
        .collect();

    let (restartable, step_defaults) = match &model.restart_config {
        Some(rc) => (rc.restartable, rc.step_defaults.clone()),
        None => (true, None),
    };

    Ok(JobTree {
        id: model.batch_name.clone(),
        restartable,
        step_defaults,
        properties: model.properties.clone(),
        listeners: model.listeners.clone(),
        elements,
    })
}

/// Ids of steps attached below some container, i.e. not top-level.
fn owned_ids(model: &JobModel) -> HashSet<&str> {
    let mut owned = HashSet::new();
    for step in &model.steps {
        if let StepNode::Split(split) = step {
            for flow_id in &split.config.flow_ids {
                owned.insert(flow_id.as_str());
            }
        }
        if step.parent_flow_id().is_some() {
            owned.insert(step.id());
        }
    }
    owned
}

fn build_element(
    step: &StepNode,
    model: &JobModel,
    by_id: &HashMap<&str, &StepNode>,
) -> JobElement {
    match step {
        StepNode::Batchlet(s) => JobElement::Step(StepElement {
            name: s.name.clone(),
            properties: s.properties.clone(),
            listeners: s.listeners.clone(),
            transitions: s.transitions.clone(),
            payload: StepPayload::Batchlet(s.config.clone()),
        }),
        StepNode::Chunk(s) => JobElement::Step(StepElement {
            name: s.name.clone(),
            properties: s.properties.clone(),
            listeners: s.listeners.clone(),
            transitions: s.transitions.clone(),
            payload: StepPayload::Chunk(s.config.clone()),
        }),
        StepNode::Decision(s) => JobElement::Decision(DecisionElement {
            name: s.name.clone(),
            decider_class: s.config.decider_class.clone(),
            properties: s.properties.clone(),
            transitions: s.transitions.clone(),
        }),
        StepNode::Split(s) => {
            let mut flows = Vec::new();
            for flow_id in &s.config.flow_ids {
                if let Some(StepNode::Flow(f)) = by_id.get(flow_id.as_str()) {
                    flows.push(build_flow(f, model, by_id));
                }
            }
            JobElement::Split(SplitElement {
                name: s.name.clone(),
                next: s.config.next_step.clone(),
                flows,
            })
        }
        StepNode::Flow(s) => JobElement::Flow(build_flow(s, model, by_id)),
    }
}

fn build_flow(
    flow: &StepBase<FlowConfig>,
    model: &JobModel,
    by_id: &HashMap<&str, &StepNode>,
) -> FlowElement {
    let children = model
        .steps
        .iter()
        .filter(|s| s.parent_flow_id() == Some(flow.id.as_str()))
        .map(|s| build_element(s, model, by_id))
        .collect();

    FlowElement {
        name: flow.name.clone(),
        next: flow.config.next_step.clone(),
        properties: flow.properties.clone(),
        children,
    }
}

// ---------------------------------------------------------------------------
// Reference checks
// ---------------------------------------------------------------------------

/// Run all model reference checks. Returns every defect found.
fn check_references(
    model: &JobModel,
    by_id: &HashMap<&str, &StepNode>,
    graph: &OwnershipGraph,
) -> Vec<ModelError> {
    let mut errors = Vec::new();

    check_unique_ids(model, &mut errors);
    check_unique_names(model, &mut errors);
    check_transition_targets(model, &mut errors);
    check_split_flow_refs(model, by_id, &mut errors);
    check_parent_refs(model, by_id, &mut errors);
    check_ownership_conflicts(model, &mut errors);
    check_ownership_cycles(graph, &mut errors);

    errors
}

fn check_unique_ids(model: &JobModel, errors: &mut Vec<ModelError>) {
    let mut seen = HashSet::new();
    for step in &model.steps {
        if !seen.insert(step.id()) {
            errors.push(ModelError::DuplicateStepId {
                id: step.id().to_string(),
            });
        }
    }
}

fn check_unique_names(model: &JobModel, errors: &mut Vec<ModelError>) {
    let mut seen = HashSet::new();
    for step in &model.steps {
        if !seen.insert(step.name()) {
            errors.push(ModelError::DuplicateStepName {
                name: step.name().to_string(),
            });
        }
    }
}

fn check_transition_targets(model: &JobModel, errors: &mut Vec<ModelError>) {
    let names: HashSet<&str> = model.steps.iter().map(|s| s.name()).collect();
    for step in &model.steps {
        for transition in step.transitions() {
            if let Some(target) = transition.target() {
                if !names.contains(target) {
                    errors.push(ModelError::UnresolvedTransition {
                        step: step.name().to_string(),
                        on: transition.on().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }
}

fn check_split_flow_refs(
    model: &JobModel,
    by_id: &HashMap<&str, &StepNode>,
    errors: &mut Vec<ModelError>,
) {
    for step in &model.steps {
        let StepNode::Split(split) = step else { continue };
        for flow_id in &split.config.flow_ids {
            match by_id.get(flow_id.as_str()) {
                None => errors.push(ModelError::DanglingFlowReference {
                    split: split.name.clone(),
                    flow_id: flow_id.clone(),
                }),
                Some(referenced) if !referenced.is_flow() => {
                    errors.push(ModelError::NotAFlow {
                        split: split.name.clone(),
                        flow_id: flow_id.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }
}

fn check_parent_refs(
    model: &JobModel,
    by_id: &HashMap<&str, &StepNode>,
    errors: &mut Vec<ModelError>,
) {
    for step in &model.steps {
        let Some(parent_id) = step.parent_flow_id() else {
            continue;
        };
        match by_id.get(parent_id) {
            None => errors.push(ModelError::DanglingParent {
                step: step.name().to_string(),
                parent_id: parent_id.to_string(),
            }),
            Some(parent) if !parent.is_flow() => {
                errors.push(ModelError::InvalidParent {
                    step: step.name().to_string(),
                    parent_id: parent_id.to_string(),
                });
            }
            Some(_) => {}
        }
    }
}

/// A flow claimed both by a split's `flowIds` and a `parentFlowId`, or by
/// two different splits, has no single owner in the tree.
fn check_ownership_conflicts(model: &JobModel, errors: &mut Vec<ModelError>) {
    let mut split_claims: HashMap<&str, usize> = HashMap::new();
    for step in &model.steps {
        if let StepNode::Split(split) = step {
            for flow_id in &split.config.flow_ids {
                *split_claims.entry(flow_id.as_str()).or_insert(0) += 1;
            }
        }
    }

    for step in &model.steps {
        let claims = split_claims.get(step.id()).copied().unwrap_or(0);
        let has_parent = step.parent_flow_id().is_some();
        if claims > 1 || (claims > 0 && has_parent) {
            errors.push(ModelError::ConflictingOwnership {
                flow: step.name().to_string(),
            });
        }
    }
}

fn check_ownership_cycles(graph: &OwnershipGraph, errors: &mut Vec<ModelError>) {
    if graph.is_cyclic() {
        errors.push(ModelError::OwnershipCycle);
    }
}
