//! Emission pass: JobTree → job descriptor XML text.
//!
//! Public API: `serialize(tree) -> Result<String, SerializationError>`
//!
//! Output is deterministic and side-effect-free: attribute and child order
//! are fixed, so structurally-equal trees produce byte-identical text.

mod steps;
mod writer;

use crate::error::SerializationError;
use crate::normalize::tree::JobTree;
use writer::XmlWriter;

/// Namespace declared on every generated `job` root element.
pub const JOB_NAMESPACE: &str = "http://xmlns.jcp.org/xml/ns/javaee";

/// Serialize a normalized job tree into UTF-8 XML text.
///
/// Required per-kind references are re-asserted here even though the
/// caller is expected to have validated completeness; a failure discards
/// the whole document, partial markup is never returned.
pub fn serialize(tree: &JobTree) -> Result<String, SerializationError> {
    if tree.id.trim().is_empty() {
        return Err(SerializationError::EmptyJobId);
    }

    let mut w = XmlWriter::new();
    w.declaration();

    let restartable = if tree.restartable { "true" } else { "false" };
    w.open(
        "job",
        &[
            ("id", tree.id.as_str()),
            ("xmlns", JOB_NAMESPACE),
            ("version", "1.0"),
            ("restartable", restartable),
        ],
    );

    steps::emit_properties(&tree.properties, &mut w);
    steps::emit_listeners(&tree.listeners, &mut w);
    for element in &tree.elements {
        steps::emit_element(element, tree.step_defaults.as_ref(), &mut w)?;
    }

    w.close();
    Ok(w.finish())
}
