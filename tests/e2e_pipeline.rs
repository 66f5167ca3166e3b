//! End-to-end tests: parse → normalize → serialize → validate → report.

mod helpers;

use helpers::*;
use jsl::emit::serialize;
use jsl::model::types::*;
use jsl::normalize::normalize;
use jsl::report::format_report;
use jsl::validate::{document, validate};

fn pipeline(model: &JobModel) -> String {
    let tree = normalize(model).expect("should normalize");
    serialize(&tree).expect("should serialize")
}

#[test]
fn generated_descriptor_validates_cleanly() {
    let json = include_str!("fixtures/job_model.json");
    let model = jsl::model::parse(json).unwrap();
    let xml = pipeline(&model);

    let outcome = validate(&xml);
    assert!(outcome.is_valid, "unexpected errors: {:?}", outcome.errors);
    assert!(outcome.errors.is_empty());
}

#[test]
fn minimal_model_roundtrip_is_valid_with_warnings() {
    let model = base_model(vec![batchlet_step("s1", "only_step", "com.test.A")]);
    let outcome = validate(&pipeline(&model));

    assert!(outcome.is_valid);
    assert!(
        outcome
            .warnings
            .iter()
            .any(|w| w.message.contains("job-level properties"))
    );
}

#[test]
fn property_values_survive_the_roundtrip() {
    let original = "payload <&> \"quoted\" 'single'";
    let mut step = base(
        "s1",
        "escaping",
        BatchletConfig {
            batchlet_class: "com.test.A".into(),
        },
    );
    step.properties = vec![prop("payload", original)];
    let model = base_model(vec![StepNode::Batchlet(step)]);
    let xml = pipeline(&model);

    let root = document::parse_document(&xml).expect("generated XML should parse");
    let step = root.find("step").expect("step element");
    let properties = step.find("properties").expect("properties element");
    let property = properties.find("property").expect("property element");
    assert_eq!(property.attr("value"), Some(original));
}

#[test]
fn clean_report_has_a_success_banner() {
    let outcome = validate(include_str!("fixtures/nightly_settlement.xml"));
    let report = format_report(&outcome);
    assert_eq!(report, "Job descriptor is valid. No problems found.\n");
}

#[test]
fn broken_document_report_lists_every_section() {
    let outcome = validate("<task id=\"t\"/>");
    let report = format_report(&outcome);

    assert!(report.starts_with("Job descriptor validation FAILED."));
    let errors_at = report.find("ERRORS").unwrap();
    let warnings_at = report.find("WARNINGS").unwrap();
    assert!(errors_at < warnings_at);
    assert!(report.contains("root element must be 'job'"));
    assert!(report.contains("namespace"));
}
