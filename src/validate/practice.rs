//! Best-practice checks. These only ever produce warnings; they are
//! additive and never demote a valid document.

use super::document::XmlElement;
use super::{Issue, IssueKind};

pub fn check_practices(root: &XmlElement, warnings: &mut Vec<Issue>) {
    check_job_properties(root, warnings);
    check_chunk_checkpointing(root, warnings);
    check_listeners(root, warnings);
}

fn check_job_properties(root: &XmlElement, warnings: &mut Vec<Issue>) {
    if root.find("properties").is_none() {
        warnings.push(Issue::new(
            IssueKind::Practice,
            "Consider adding job-level properties for configuration flexibility",
            Some(root.name.clone()),
        ));
    }
}

fn check_chunk_checkpointing(root: &XmlElement, warnings: &mut Vec<Issue>) {
    for step in root.descendants() {
        if step.name != "step" {
            continue;
        }
        let Some(chunk) = step.find("chunk") else {
            continue;
        };
        let has_checkpoint = chunk.attr("checkpoint-policy").is_some()
            || chunk.attr("item-count").is_some()
            || chunk.attr("time-limit").is_some();
        if !has_checkpoint {
            let anchor = step.attr("id").unwrap_or("step").to_string();
            let message = format!("step '{}' has checkpointing disabled for its chunk", anchor);
            warnings.push(Issue::new(IssueKind::Practice, message, Some(anchor)));
        }
    }
}

fn check_listeners(root: &XmlElement, warnings: &mut Vec<Issue>) {
    let any_listeners = root
        .descendants()
        .iter()
        .any(|element| element.name == "listeners");
    if !any_listeners {
        warnings.push(Issue::new(
            IssueKind::Practice,
            "no listeners registered; consider adding job or step listeners",
            Some(root.name.clone()),
        ));
    }
}
