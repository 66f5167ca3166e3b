//! Per-element semantic rules: chunk shape and required ref attributes.

use super::document::XmlElement;
use super::{Issue, IssueKind};

const CHECKPOINT_POLICIES: [&str; 3] = ["item", "time", "custom"];

/// Run all per-element rules over the document.
pub fn check_elements(root: &XmlElement, errors: &mut Vec<Issue>) {
    walk(root, None, errors);
}

/// Preorder walk tracking the nearest identified ancestor so findings can
/// be anchored to a step id rather than a bare element name.
fn walk<'a>(element: &'a XmlElement, owner: Option<&'a str>, errors: &mut Vec<Issue>) {
    let owner = element.attr("id").filter(|id| !id.is_empty()).or(owner);

    match element.name.as_str() {
        "chunk" => check_chunk(element, owner, errors),
        "batchlet" | "decision" => check_ref(element, owner, errors),
        _ => {}
    }

    for child in &element.children {
        walk(child, owner, errors);
    }
}

fn check_chunk(chunk: &XmlElement, owner: Option<&str>, errors: &mut Vec<Issue>) {
    let anchor = || Some(owner.unwrap_or("chunk").to_string());

    if let Some(policy) = chunk.attr("checkpoint-policy") {
        if !CHECKPOINT_POLICIES.contains(&policy) {
            errors.push(Issue::new(
                IssueKind::Chunk,
                format!(
                    "checkpoint-policy must be one of 'item', 'time', 'custom', found '{}'",
                    policy
                ),
                anchor(),
            ));
        }
    }

    if chunk.find("reader").is_none() {
        errors.push(Issue::new(
            IssueKind::Chunk,
            "chunk must contain a reader",
            anchor(),
        ));
    }
    if chunk.find("writer").is_none() {
        errors.push(Issue::new(
            IssueKind::Chunk,
            "chunk must contain a writer",
            anchor(),
        ));
    }
}

fn check_ref(element: &XmlElement, owner: Option<&str>, errors: &mut Vec<Issue>) {
    let missing = match element.attr("ref") {
        None | Some("") => true,
        Some(_) => false,
    };
    if missing {
        errors.push(Issue::new(
            IssueKind::Reference,
            format!("'{}' must carry a non-empty ref attribute", element.name),
            Some(owner.unwrap_or(element.name.as_str()).to_string()),
        ));
    }
}
