//! petgraph-based directed graph over flow-ownership references.
//!
//! Edges run container → child, combining both reference styles the model
//! carries: a split's `flowIds` list and a step's `parentFlowId`
//! back-reference. Dangling references are skipped here and reported by the
//! normalizer's reference checks.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{JobModel, StepNode};

pub struct OwnershipGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl OwnershipGraph {
    pub fn build(model: &JobModel) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for step in &model.steps {
            let id = step.id().to_string();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for step in &model.steps {
            if let StepNode::Split(split) = step {
                let Some(&owner) = node_indices.get(&split.id) else {
                    continue;
                };
                for flow_id in &split.config.flow_ids {
                    if let Some(&child) = node_indices.get(flow_id) {
                        graph.add_edge(owner, child, ());
                    }
                }
            }
            if let Some(parent_id) = step.parent_flow_id() {
                if let (Some(&owner), Some(&child)) =
                    (node_indices.get(parent_id), node_indices.get(step.id()))
                {
                    graph.add_edge(owner, child, ());
                }
            }
        }

        OwnershipGraph {
            graph,
            node_indices,
        }
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}
