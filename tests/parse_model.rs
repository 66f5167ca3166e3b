//! Integration tests for job model JSON parsing.

use jsl::error::ModelError;
use jsl::model::{self, StepNode, Transition};

#[test]
fn parse_example_model() {
    let json = include_str!("fixtures/job_model.json");
    let model = model::parse(json).expect("should parse");

    assert_eq!(model.batch_name, "nightly_settlement");
    assert_eq!(model.functional_area.as_deref(), Some("SET"));
    assert_eq!(model.steps.len(), 9);
    assert_eq!(model.properties.len(), 2);
    assert_eq!(model.listeners.len(), 1);

    let restart = model.restart_config.as_ref().expect("restart config");
    assert!(restart.restartable);
    let defaults = restart.step_defaults.as_ref().expect("step defaults");
    assert_eq!(defaults.start_limit, Some(3));
    assert_eq!(defaults.allow_start_if_complete, Some(false));
}

#[test]
fn parse_chunk_config() {
    let json = include_str!("fixtures/job_model.json");
    let model = model::parse(json).unwrap();

    let StepNode::Chunk(chunk) = &model.steps[1] else {
        panic!("second step should be a chunk");
    };
    assert_eq!(chunk.name, "load_trades");
    assert_eq!(
        chunk.config.processor_class.as_deref(),
        Some("com.acme.batch.settlement.TradeEnricher")
    );
    let checkpoint = chunk.config.checkpoint.as_ref().unwrap();
    assert!(checkpoint.enabled);
    assert_eq!(checkpoint.item_count, Some(500));
    let partition = chunk.config.partition.as_ref().unwrap();
    assert_eq!(partition.partitions, Some(4));
    assert!(partition.mapper_class.is_none());
}

#[test]
fn parse_transition_variants() {
    let json = include_str!("fixtures/job_model.json");
    let model = model::parse(json).unwrap();

    let decision = &model.steps[2];
    let transitions = decision.transitions();
    assert_eq!(transitions.len(), 2);
    assert!(matches!(
        &transitions[0],
        Transition::Next { on, to } if on == "HIGH" && to == "parallel_settle"
    ));
    assert!(matches!(
        &transitions[1],
        Transition::End { on, exit_status }
            if on == "EMPTY" && exit_status.as_deref() == Some("NOTHING_TO_DO")
    ));
}

#[test]
fn parse_flow_ownership_fields() {
    let json = include_str!("fixtures/job_model.json");
    let model = model::parse(json).unwrap();

    let StepNode::Split(split) = &model.steps[3] else {
        panic!("fourth step should be a split");
    };
    assert_eq!(split.config.flow_ids, vec!["flow-1", "flow-2"]);
    assert_eq!(split.config.next_step.as_deref(), Some("archive_results"));

    assert_eq!(model.steps[5].parent_flow_id(), Some("flow-1"));
    assert_eq!(model.steps[4].parent_flow_id(), None);
}

#[test]
fn step_kind_accessors() {
    let json = include_str!("fixtures/job_model.json");
    let model = model::parse(json).unwrap();

    let kinds: Vec<&str> = model.steps.iter().map(|s| s.kind_name()).collect();
    assert_eq!(
        kinds,
        vec![
            "batchlet", "chunk", "decision", "split", "flow", "batchlet", "flow", "chunk",
            "batchlet"
        ]
    );
    assert!(model.steps[3].is_split());
    assert!(model.steps[4].is_flow());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = model::parse("{not json").unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}

#[test]
fn unknown_step_kind_is_a_parse_error() {
    let json = r#"{
        "batchName": "j",
        "steps": [{ "type": "teleport", "id": "s1", "name": "s1" }]
    }"#;
    let err = model::parse(json).unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}
