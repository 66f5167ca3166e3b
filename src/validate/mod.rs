//! Descriptor validation phase.
//!
//! Checks arbitrary XML text against the job descriptor grammar and
//! reports every problem at once: findings are accumulated across
//! independent passes, never thrown, and each pass runs regardless of
//! earlier failures. Input need not have been produced by this crate's
//! serializer.

pub mod document;

mod element_rules;
mod practice;
mod structural;

use serde::{Deserialize, Serialize};

/// Result of validating one XML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    /// The id or name of the element the finding is anchored to.
    pub element: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Parse,
    Structure,
    Namespace,
    Version,
    Attribute,
    Identity,
    Chunk,
    Reference,
    Practice,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IssueKind::Parse => "parse",
            IssueKind::Structure => "structure",
            IssueKind::Namespace => "namespace",
            IssueKind::Version => "version",
            IssueKind::Attribute => "attribute",
            IssueKind::Identity => "identity",
            IssueKind::Chunk => "chunk",
            IssueKind::Reference => "reference",
            IssueKind::Practice => "practice",
        };
        write!(f, "{}", label)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.element {
            Some(element) => write!(f, "[{}] {} (element '{}')", self.kind, self.message, element),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>, element: Option<String>) -> Self {
        Issue {
            kind,
            message: message.into(),
            element,
        }
    }
}

/// Validate XML text as a job descriptor. Never panics on malformed input;
/// a parse failure becomes a single fatal `parse` issue.
pub fn validate(xml: &str) -> ValidationOutcome {
    let root = match document::parse_document(xml) {
        Ok(root) => root,
        Err(message) => {
            return ValidationOutcome {
                is_valid: false,
                errors: vec![Issue::new(IssueKind::Parse, message, None)],
                warnings: Vec::new(),
            };
        }
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    structural::check_document(&root, &mut errors);
    element_rules::check_elements(&root, &mut errors);
    practice::check_practices(&root, &mut warnings);

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
