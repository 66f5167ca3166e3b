//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{ModelError, SerializationError};

/// Serialize a job model JSON into descriptor XML.
/// Returns `{status: "success", xml}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn serialize_job(json: &str) -> JsValue {
    let result = serialize_job_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn serialize_job_inner(json: &str) -> SerializeResult {
    let model = match crate::model::parse(json) {
        Ok(model) => model,
        Err(e) => return SerializeResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    };

    let tree = match crate::normalize::normalize(&model) {
        Ok(tree) => tree,
        Err(errors) => return SerializeResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    };

    match crate::emit::serialize(&tree) {
        Ok(xml) => SerializeResult::Success { xml },
        Err(e) => SerializeResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// Validate descriptor XML text.
/// Returns a `{isValid, errors, warnings}` object.
#[wasm_bindgen]
pub fn validate_descriptor(xml: &str) -> JsValue {
    let outcome = crate::validate::validate(xml);
    serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
}

/// Full pipeline: parse → normalize → serialize → validate.
/// Returns `{status: "success", xml, outcome}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn build_descriptor(json: &str) -> JsValue {
    let result = build_descriptor_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn build_descriptor_inner(json: &str) -> BuildResult {
    let xml = match serialize_job_inner(json) {
        SerializeResult::Success { xml } => xml,
        SerializeResult::Errors { errors } => return BuildResult::Errors { errors },
    };

    let outcome = crate::validate::validate(&xml);
    BuildResult::Success { xml, outcome }
}

/// Validate descriptor XML and render the findings as a report string.
#[wasm_bindgen]
pub fn format_validation_report(xml: &str) -> String {
    crate::report::format_report(&crate::validate::validate(xml))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    phase: String,
    message: String,
}

impl From<ModelError> for ErrorDto {
    fn from(e: ModelError) -> Self {
        ErrorDto {
            phase: "model".into(),
            message: e.to_string(),
        }
    }
}

impl From<SerializationError> for ErrorDto {
    fn from(e: SerializationError) -> Self {
        ErrorDto {
            phase: "serialize".into(),
            message: e.to_string(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum SerializeResult {
    #[serde(rename = "success")]
    Success { xml: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum BuildResult {
    #[serde(rename = "success")]
    Success {
        xml: String,
        outcome: crate::validate::ValidationOutcome,
    },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
