//! Field list parsing
//!
//! The generator is instructed to answer with a bare JSON array of field
//! descriptors, but models wrap output in Markdown fences or an object with a
//! `fields` key often enough that parsing tolerates both. Parsing is strict
//! about everything else: the payload must deserialize into descriptors.

use serde_json::Value;

use super::errors::{DescriptorError, DescriptorResult};
use super::types::FieldDescriptor;

/// Parse a field-descriptor list out of raw generator text.
///
/// Accepts, in order of preference:
/// - a bare JSON array of descriptors
/// - a JSON object with a `fields` array
/// with or without surrounding Markdown code fences.
pub fn parse_field_list(text: &str) -> DescriptorResult<Vec<FieldDescriptor>> {
    let payload = strip_code_fences(text);
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(DescriptorError::NoJsonFound);
    }

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        // Prose around the JSON: retry on the widest bracketed slice.
        Err(_) => match extract_json_slice(payload) {
            Some(slice) => serde_json::from_str(slice)?,
            None => return Err(DescriptorError::NoJsonFound),
        },
    };

    descriptors_from_value(value)
}

fn descriptors_from_value(value: Value) -> DescriptorResult<Vec<FieldDescriptor>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove("fields") {
            Some(fields @ Value::Array(_)) => Ok(serde_json::from_value(fields)?),
            Some(_) => Err(DescriptorError::UnexpectedShape("a non-array 'fields' value")),
            None => Err(DescriptorError::UnexpectedShape("an object without 'fields'")),
        },
        Value::String(_) => Err(DescriptorError::UnexpectedShape("a string")),
        Value::Number(_) => Err(DescriptorError::UnexpectedShape("a number")),
        Value::Bool(_) => Err(DescriptorError::UnexpectedShape("a boolean")),
        Value::Null => Err(DescriptorError::UnexpectedShape("null")),
    }
}

/// Remove a single surrounding Markdown code fence, with or without a
/// language tag. Text without fences is returned unchanged.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag line (e.g. "json") if present.
    match rest.split_once('\n') {
        Some((first_line, body)) if !first_line.trim().is_empty() => body,
        _ => rest,
    }
}

/// Widest slice from the first opening bracket to the last matching closer.
fn extract_json_slice(text: &str) -> Option<&str> {
    let array = slice_between(text, '[', ']');
    let object = slice_between(text, '{', '}');
    // Prefer the array shape; an object reply embeds the array anyway.
    array.or(object)
}

fn slice_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
