//! Document-level structural rules: root element, namespace, version,
//! restartable literal, element identity.

use std::collections::HashSet;

use super::document::XmlElement;
use super::{Issue, IssueKind};
use crate::emit::JOB_NAMESPACE;

/// Element names that carry a step identity in the descriptor grammar.
const IDENTIFIED_ELEMENTS: [&str; 4] = ["step", "decision", "split", "flow"];

/// Run all document-level rules. Each appends its findings and never
/// short-circuits the others.
pub fn check_document(root: &XmlElement, errors: &mut Vec<Issue>) {
    check_root_name(root, errors);
    check_namespace(root, errors);
    check_version(root, errors);
    check_restartable(root, errors);
    check_element_ids(root, errors);
}

fn check_root_name(root: &XmlElement, errors: &mut Vec<Issue>) {
    if root.name != "job" {
        errors.push(Issue::new(
            IssueKind::Structure,
            format!("root element must be 'job', found '{}'", root.name),
            Some(root.name.clone()),
        ));
    }
}

fn check_namespace(root: &XmlElement, errors: &mut Vec<Issue>) {
    if root.attr("xmlns") != Some(JOB_NAMESPACE) {
        errors.push(Issue::new(
            IssueKind::Namespace,
            format!(
                "missing or unexpected batch namespace declaration; expected xmlns=\"{}\"",
                JOB_NAMESPACE
            ),
            Some(root.name.clone()),
        ));
    }
}

fn check_version(root: &XmlElement, errors: &mut Vec<Issue>) {
    if let Some(version) = root.attr("version") {
        if version != "1.0" {
            errors.push(Issue::new(
                IssueKind::Version,
                format!("version must be \"1.0\", found \"{}\"", version),
                Some(root.name.clone()),
            ));
        }
    }
}

fn check_restartable(root: &XmlElement, errors: &mut Vec<Issue>) {
    if let Some(restartable) = root.attr("restartable") {
        if restartable != "true" && restartable != "false" {
            errors.push(Issue::new(
                IssueKind::Attribute,
                format!(
                    "restartable must be 'true' or 'false', found '{}'",
                    restartable
                ),
                Some(root.name.clone()),
            ));
        }
    }
}

fn check_element_ids(root: &XmlElement, errors: &mut Vec<Issue>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for element in root.descendants() {
        if !IDENTIFIED_ELEMENTS.contains(&element.name.as_str()) {
            continue;
        }
        match element.attr("id") {
            None | Some("") => {
                errors.push(Issue::new(
                    IssueKind::Identity,
                    format!("'{}' element is missing a non-empty id", element.name),
                    Some(element.name.clone()),
                ));
            }
            Some(id) => {
                if !seen.insert(id) {
                    errors.push(Issue::new(
                        IssueKind::Identity,
                        format!("duplicate step id '{}'", id),
                        Some(id.to_string()),
                    ));
                }
            }
        }
    }
}
